//! List State Store
//!
//! Both participants' collections live in a Leptos reactive store. Every
//! mutation is applied locally first and returns the matching API call as a
//! future; components spawn it with `spawn_local` and never await it.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::TodoApi;
use crate::models::{Participant, TodoItem};

/// Client-side list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    pub boy_todos: Vec<TodoItem>,
    pub girl_todos: Vec<TodoItem>,
    /// True until the initial fetch settles
    pub loading: bool,
    /// Message of the last failed load
    pub load_error: Option<String>,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

pub type ListStore = Store<ListState>;

// ========================
// Collection Helpers
// ========================

/// Swap an optimistic item for the server's copy in place, keeping the local
/// `completed` value. `None` if the item is gone, otherwise whether the local
/// value differs from the server's.
pub fn reconcile_item(items: &mut [TodoItem], temp_id: &str, created: TodoItem) -> Option<bool> {
    let item = items.iter_mut().find(|item| item.id == temp_id)?;
    let diverged = item.completed != created.completed;
    *item = TodoItem {
        completed: item.completed,
        ..created
    };
    Some(diverged)
}

/// Flip `completed` of an item by id, returning the updated item
pub fn toggle_item(items: &mut [TodoItem], id: &str) -> Option<TodoItem> {
    let item = items.iter_mut().find(|item| item.id == id)?;
    item.completed = !item.completed;
    Some(item.clone())
}

/// Remove an item by id, returning it
pub fn remove_item(items: &mut Vec<TodoItem>, id: &str) -> Option<TodoItem> {
    let index = items.iter().position(|item| item.id == id)?;
    Some(items.remove(index))
}

/// Milliseconds since the Unix epoch, from the browser clock
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

// ========================
// Todo Store
// ========================

/// Owner of the list state. All mutation goes through its operations.
#[derive(Clone, Copy)]
pub struct TodoStore {
    state: ListStore,
    api: StoredValue<Arc<dyn TodoApi>>,
    clock: fn() -> u64,
    last_stamp: StoredValue<u64>,
}

impl TodoStore {
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self::with_clock(api, now_millis)
    }

    pub fn with_clock(api: Arc<dyn TodoApi>, clock: fn() -> u64) -> Self {
        Self {
            state: Store::new(ListState::new()),
            api: StoredValue::new(api),
            clock,
            last_stamp: StoredValue::new(0),
        }
    }

    pub fn state(&self) -> ListStore {
        self.state
    }

    /// Tracked snapshot of one collection
    pub fn todos(&self, participant: Participant) -> Vec<TodoItem> {
        match participant {
            Participant::Boy => self.state.boy_todos().get(),
            Participant::Girl => self.state.girl_todos().get(),
        }
    }

    pub fn todos_untracked(&self, participant: Participant) -> Vec<TodoItem> {
        match participant {
            Participant::Boy => self.state.boy_todos().get_untracked(),
            Participant::Girl => self.state.girl_todos().get_untracked(),
        }
    }

    fn update_collection<R>(&self, participant: Participant, f: impl FnOnce(&mut Vec<TodoItem>) -> R) -> R {
        match participant {
            Participant::Boy => {
                let field = self.state.boy_todos();
                let mut items = field.write();
                f(&mut *items)
            }
            Participant::Girl => {
                let field = self.state.girl_todos();
                let mut items = field.write();
                f(&mut *items)
            }
        }
    }

    /// Discriminator plus timestamp, strictly increasing within this store
    fn next_temp_id(&self, participant: Participant) -> String {
        let stamp = (self.clock)().max(self.last_stamp.get_value() + 1);
        self.last_stamp.set_value(stamp);
        format!("{}{}", participant.initial(), stamp)
    }

    /// Append an optimistic item and create it remotely.
    ///
    /// Blank text is ignored and returns `None`: nothing is appended and no
    /// request is made.
    pub fn add(&self, participant: Participant, text: &str) -> Option<impl Future<Output = ()> + 'static> {
        let text = text.trim().to_string();
        if text.is_empty() {
            log::debug!("[STORE] Ignoring blank {} todo", participant);
            return None;
        }

        let temp_id = self.next_temp_id(participant);
        self.update_collection(participant, |items| {
            items.push(TodoItem::optimistic(temp_id.clone(), text.clone()))
        });
        log::debug!("[STORE] Added {} todo {} optimistically", participant, temp_id);

        let store = *self;
        let api = self.api.get_value();
        Some(async move {
            let created = match api.create(participant, &text).await {
                Ok(created) => created,
                Err(e) => {
                    // No rollback: the item stays, still marked pending
                    log::error!("[STORE] Failed to add {} todo {}: {}", participant, temp_id, e);
                    return;
                }
            };

            let server_id = created.id.clone();
            let reconciled = store.update_collection(participant, |items| reconcile_item(items, &temp_id, created));
            match reconciled {
                Some(false) => {
                    log::debug!("[STORE] Reconciled {} todo {} -> {}", participant, temp_id, server_id);
                    return;
                }
                Some(true) => {
                    // Toggled while the create was in flight
                    log::debug!("[STORE] Reconciled {} todo {} -> {}, syncing completion", participant, temp_id, server_id);
                    if let Err(e) = api.toggle_completion(participant, &server_id).await {
                        log::error!("[STORE] Failed to toggle {} todo {}: {}", participant, server_id, e);
                    }
                    return;
                }
                None => {}
            }

            // Deleted locally while the create was in flight
            log::warn!(
                "[STORE] {} todo {} was removed before creation finished, deleting {}",
                participant, temp_id, server_id
            );
            if let Err(e) = api.remove(participant, &server_id).await {
                log::error!("[STORE] Failed to delete orphaned {} todo {}: {}", participant, server_id, e);
            }
        })
    }

    /// Flip completion locally, then on the server.
    ///
    /// A pending item is only flipped locally; its completion is sent when
    /// the create resolves.
    pub fn toggle(&self, participant: Participant, id: &str) -> impl Future<Output = ()> + 'static {
        let id = id.to_string();
        let remote = match self.update_collection(participant, |items| toggle_item(items, &id)) {
            Some(item) => !item.pending,
            None => {
                log::debug!("[STORE] Toggle of unknown {} todo {}", participant, id);
                true
            }
        };

        let api = self.api.get_value();
        async move {
            if !remote {
                return;
            }
            if let Err(e) = api.toggle_completion(participant, &id).await {
                log::error!("[STORE] Failed to toggle {} todo {}: {}", participant, id, e);
            }
        }
    }

    /// Remove locally, then on the server.
    ///
    /// A pending item has no server copy yet; the create path deletes it once
    /// its id is known.
    pub fn remove(&self, participant: Participant, id: &str) -> impl Future<Output = ()> + 'static {
        let id = id.to_string();
        let remote = match self.update_collection(participant, |items| remove_item(items, &id)) {
            Some(item) => !item.pending,
            None => {
                log::debug!("[STORE] Delete of unknown {} todo {}", participant, id);
                true
            }
        };

        let api = self.api.get_value();
        async move {
            if !remote {
                return;
            }
            if let Err(e) = api.remove(participant, &id).await {
                log::error!("[STORE] Failed to delete {} todo {}: {}", participant, id, e);
            }
        }
    }

    /// Replace both collections with the server's
    pub fn load(&self) -> impl Future<Output = ()> + 'static {
        *self.state.loading().write() = true;

        let store = *self;
        let api = self.api.get_value();
        async move {
            match api.list_all().await {
                Ok(mut lists) => {
                    for participant in Participant::ALL {
                        let fetched = std::mem::take(lists.of_mut(participant));
                        store.update_collection(participant, |items| *items = fetched);
                    }
                    *store.state.load_error().write() = None;
                    log::info!("[STORE] Loaded todos");
                }
                Err(e) => {
                    log::error!("[STORE] Failed to load todos: {}", e);
                    *store.state.load_error().write() = Some(e.to_string());
                }
            }
            *store.state.loading().write() = false;
        }
    }
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, ApiResult};
    use crate::models::TodoLists;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        ListAll,
        Create(Participant, String),
        Toggle(Participant, String),
        Remove(Participant, String),
    }

    /// In-memory API that records every call
    #[derive(Default)]
    struct FakeApi {
        calls: Mutex<Vec<Call>>,
        lists: Mutex<TodoLists>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl FakeApi {
        fn with_lists(lists: TodoLists) -> Self {
            Self {
                lists: Mutex::new(lists),
                ..Default::default()
            }
        }

        fn failing_writes() -> Self {
            Self {
                fail_writes: true,
                ..Default::default()
            }
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn write_result(&self) -> ApiResult<()> {
            if self.fail_writes {
                Err(ApiError::Network("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl TodoApi for FakeApi {
        async fn list_all(&self) -> ApiResult<TodoLists> {
            self.record(Call::ListAll);
            if self.fail_reads {
                return Err(ApiError::Status { status: 500, url: "/todos".to_string() });
            }
            Ok(self.lists.lock().unwrap().clone())
        }

        async fn create(&self, participant: Participant, text: &str) -> ApiResult<TodoItem> {
            self.record(Call::Create(participant, text.to_string()));
            self.write_result()?;
            let mut lists = self.lists.lock().unwrap();
            let items = lists.of_mut(participant);
            let created = TodoItem {
                id: format!("srv-{}-{}", participant, items.len() + 1),
                text: text.to_string(),
                completed: false,
                pending: false,
            };
            items.push(created.clone());
            Ok(created)
        }

        async fn toggle_completion(&self, participant: Participant, id: &str) -> ApiResult<()> {
            self.record(Call::Toggle(participant, id.to_string()));
            self.write_result()
        }

        async fn remove(&self, participant: Participant, id: &str) -> ApiResult<()> {
            self.record(Call::Remove(participant, id.to_string()));
            self.write_result()
        }
    }

    fn fixed_clock() -> u64 {
        1_700_000_000_000
    }

    fn item(id: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            text: format!("Todo {}", id),
            completed,
            pending: false,
        }
    }

    fn setup(api: Arc<FakeApi>) -> (Owner, TodoStore) {
        let owner = Owner::new();
        owner.set();
        let store = TodoStore::with_clock(api, fixed_clock);
        (owner, store)
    }

    fn seeded_api() -> Arc<FakeApi> {
        Arc::new(FakeApi::with_lists(TodoLists {
            boy_todos: vec![item("b1", true)],
            girl_todos: vec![item("g1", false), item("g2", true)],
        }))
    }

    #[test]
    fn test_collection_helpers() {
        let mut items = vec![item("a", false), item("b", false), item("c", true)];

        assert_eq!(toggle_item(&mut items, "b"), Some(item("b", true)));
        assert!(items[1].completed);
        assert_eq!(toggle_item(&mut items, "zz"), None);

        // local completion wins over the server copy
        assert_eq!(reconcile_item(&mut items, "b", item("b2", false)), Some(true));
        assert_eq!(items[1].id, "b2");
        assert!(items[1].completed);
        assert_eq!(reconcile_item(&mut items, "zz", item("x", false)), None);

        assert_eq!(remove_item(&mut items, "c"), Some(item("c", true)));
        assert_eq!(remove_item(&mut items, "c"), None);
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_load_replaces_collections() {
        let api = seeded_api();
        let (_owner, store) = setup(api.clone());
        assert!(store.state().loading().get_untracked());

        store.load().await;

        assert_eq!(store.todos_untracked(Participant::Boy), vec![item("b1", true)]);
        assert_eq!(store.todos_untracked(Participant::Girl).len(), 2);
        assert!(!store.state().loading().get_untracked());
        assert_eq!(store.state().load_error().get_untracked(), None);
        assert_eq!(api.calls(), vec![Call::ListAll]);
    }

    #[tokio::test]
    async fn test_load_failure_clears_loading() {
        let api = Arc::new(FakeApi {
            fail_reads: true,
            ..Default::default()
        });
        let (_owner, store) = setup(api);

        store.load().await;

        assert!(!store.state().loading().get_untracked());
        let error = store.state().load_error().get_untracked().expect("load error recorded");
        assert!(error.contains("500"));
        assert!(store.todos_untracked(Participant::Boy).is_empty());
    }

    #[tokio::test]
    async fn test_blank_add_is_noop() {
        let api = Arc::new(FakeApi::default());
        let (_owner, store) = setup(api.clone());

        assert!(store.add(Participant::Boy, "").is_none());
        assert!(store.add(Participant::Girl, "   \t ").is_none());

        assert!(store.todos_untracked(Participant::Boy).is_empty());
        assert!(store.todos_untracked(Participant::Girl).is_empty());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_add_is_optimistic_then_reconciled() {
        let api = seeded_api();
        let (_owner, store) = setup(api.clone());
        store.load().await;

        let sync = store.add(Participant::Girl, "  Water the plants ").expect("non-blank text");

        // visible before the request resolves
        let girl = store.todos_untracked(Participant::Girl);
        assert_eq!(girl.len(), 3);
        assert_eq!(girl[2].id, "g1700000000000");
        assert_eq!(girl[2].text, "Water the plants");
        assert!(girl[2].pending);

        sync.await;

        let girl = store.todos_untracked(Participant::Girl);
        assert_eq!(girl.len(), 3);
        assert_eq!(girl[2].id, "srv-girl-3");
        assert!(!girl[2].pending);
        assert_eq!(
            api.calls(),
            vec![Call::ListAll, Call::Create(Participant::Girl, "Water the plants".to_string())]
        );
    }

    #[tokio::test]
    async fn test_reconcile_preserves_position() {
        let api = Arc::new(FakeApi::default());
        let (_owner, store) = setup(api);

        let first = store.add(Participant::Boy, "first").unwrap();
        let _second = store.add(Participant::Boy, "second").unwrap();

        first.await;

        let boy = store.todos_untracked(Participant::Boy);
        assert_eq!(boy[0].id, "srv-boy-1");
        assert_eq!(boy[1].text, "second");
        assert!(boy[1].pending);
    }

    #[tokio::test]
    async fn test_same_millisecond_temp_ids_differ() {
        let api = Arc::new(FakeApi::default());
        let (_owner, store) = setup(api);

        let _a = store.add(Participant::Boy, "one");
        let _b = store.add(Participant::Boy, "two");

        let boy = store.todos_untracked(Participant::Boy);
        assert_eq!(boy[0].id, "b1700000000000");
        assert_eq!(boy[1].id, "b1700000000001");
    }

    #[tokio::test]
    async fn test_failed_add_keeps_pending_item() {
        let api = Arc::new(FakeApi::failing_writes());
        let (_owner, store) = setup(api);

        store.add(Participant::Boy, "Fix the bike").unwrap().await;

        let boy = store.todos_untracked(Participant::Boy);
        assert_eq!(boy.len(), 1);
        assert_eq!(boy[0].text, "Fix the bike");
        assert!(boy[0].pending);
    }

    #[tokio::test]
    async fn test_removed_before_create_deletes_server_copy() {
        let api = Arc::new(FakeApi::default());
        let (_owner, store) = setup(api.clone());

        let sync = store.add(Participant::Girl, "Plan trip").unwrap();
        let temp_id = store.todos_untracked(Participant::Girl)[0].id.clone();
        store.remove(Participant::Girl, &temp_id).await;
        sync.await;

        assert!(store.todos_untracked(Participant::Girl).is_empty());
        assert_eq!(
            api.calls(),
            vec![
                Call::Create(Participant::Girl, "Plan trip".to_string()),
                Call::Remove(Participant::Girl, "srv-girl-1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_toggle_before_create_keeps_completion() {
        let api = Arc::new(FakeApi::default());
        let (_owner, store) = setup(api.clone());

        let sync = store.add(Participant::Boy, "Buy milk").unwrap();
        let temp_id = store.todos_untracked(Participant::Boy)[0].id.clone();
        store.toggle(Participant::Boy, &temp_id).await;
        assert!(store.todos_untracked(Participant::Boy)[0].completed);

        sync.await;

        let boy = store.todos_untracked(Participant::Boy);
        assert_eq!(boy.len(), 1);
        assert_eq!(boy[0].id, "srv-boy-1");
        assert!(boy[0].completed);
        assert!(!boy[0].pending);
        assert_eq!(
            api.calls(),
            vec![
                Call::Create(Participant::Boy, "Buy milk".to_string()),
                Call::Toggle(Participant::Boy, "srv-boy-1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_toggle_twice_before_create_sends_nothing_extra() {
        let api = Arc::new(FakeApi::default());
        let (_owner, store) = setup(api.clone());

        let sync = store.add(Participant::Girl, "Call grandma").unwrap();
        let temp_id = store.todos_untracked(Participant::Girl)[0].id.clone();
        store.toggle(Participant::Girl, &temp_id).await;
        store.toggle(Participant::Girl, &temp_id).await;
        sync.await;

        let girl = store.todos_untracked(Participant::Girl);
        assert!(!girl[0].completed);
        assert_eq!(api.calls(), vec![Call::Create(Participant::Girl, "Call grandma".to_string())]);
    }

    #[tokio::test]
    async fn test_toggle_twice_round_trips() {
        let api = seeded_api();
        let (_owner, store) = setup(api.clone());
        store.load().await;

        let first = store.toggle(Participant::Girl, "g1");
        assert!(store.todos_untracked(Participant::Girl)[0].completed);
        let second = store.toggle(Participant::Girl, "g1");
        assert!(!store.todos_untracked(Participant::Girl)[0].completed);

        // in flight together, no ordering between them
        second.await;
        first.await;

        assert!(!store.todos_untracked(Participant::Girl)[0].completed);
        let toggles: Vec<_> = api.calls().into_iter().filter(|c| matches!(c, Call::Toggle(..))).collect();
        assert_eq!(
            toggles,
            vec![
                Call::Toggle(Participant::Girl, "g1".to_string()),
                Call::Toggle(Participant::Girl, "g1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_toggle_is_not_reverted() {
        let api = Arc::new(FakeApi {
            lists: Mutex::new(TodoLists {
                boy_todos: vec![item("b1", false)],
                girl_todos: vec![],
            }),
            fail_writes: true,
            ..Default::default()
        });
        let (_owner, store) = setup(api);
        store.load().await;

        store.toggle(Participant::Boy, "b1").await;

        assert!(store.todos_untracked(Participant::Boy)[0].completed);
    }

    #[tokio::test]
    async fn test_rejected_delete_stays_removed() {
        let api = Arc::new(FakeApi {
            lists: Mutex::new(TodoLists {
                boy_todos: vec![item("b1", false), item("b2", true)],
                girl_todos: vec![item("g1", false)],
            }),
            fail_writes: true,
            ..Default::default()
        });
        let (_owner, store) = setup(api.clone());
        store.load().await;

        let sync = store.remove(Participant::Boy, "b1");
        assert_eq!(store.todos_untracked(Participant::Boy), vec![item("b2", true)]);

        sync.await;

        assert_eq!(store.todos_untracked(Participant::Boy), vec![item("b2", true)]);
        assert_eq!(store.todos_untracked(Participant::Girl).len(), 1);
        assert!(api.calls().contains(&Call::Remove(Participant::Boy, "b1".to_string())));
    }
}
