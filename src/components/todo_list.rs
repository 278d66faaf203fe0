//! Todo List Component
//!
//! One participant's list: header with progress, items and the add form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TodoItemRow;
use crate::models::Participant;
use crate::stats::ParticipantStats;
use crate::store::use_todo_store;

fn list_title(participant: Participant) -> String {
    format!("{}의 하루", participant.display_name())
}

#[component]
pub fn TodoList(participant: Participant) -> impl IntoView {
    let store = use_todo_store();
    let (new_text, set_new_text) = signal(String::new());

    let progress = Memo::new(move |_| ParticipantStats::from_items(&store.todos(participant)));
    let progress_width = move || {
        let p = progress.get();
        if p.total > 0 {
            format!("width: {}%;", p.completed as f64 / p.total as f64 * 100.0)
        } else {
            "width: 0%;".to_string()
        }
    };

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(sync) = store.add(participant, &new_text.get_untracked()) {
            set_new_text.set(String::new());
            spawn_local(sync);
        }
    };

    view! {
        <section class=format!("todo-list fade-in {}", participant.as_str())>
            // Header
            <div class="list-header">
                <div>
                    <h2 class="list-title">{list_title(participant)}</h2>
                    <p class="list-subtitle">"오늘도 화이팅!"</p>
                </div>
                <div class="count-badge">
                    {move || format!("{}/{}", progress.get().completed, progress.get().total)}
                </div>
            </div>

            // Progress bar
            <div class="progress-track">
                <div class="progress-fill" style=progress_width></div>
            </div>

            // Items
            <div class="todo-items">
                <For
                    each=move || store.todos(participant)
                    key=|item| (item.id.clone(), item.completed, item.pending)
                    children=move |item| view! { <TodoItemRow participant=participant item=item /> }
                />

                <Show when=move || progress.get().total == 0>
                    <div class="empty-state">
                        <span class="empty-face">"\\(^o^)/"</span>
                        <p class="muted">"할 일이 없어요! 추가해 보세요"</p>
                    </div>
                </Show>
            </div>

            // Add form
            <form class="add-form" on:submit=add_todo>
                <input
                    type="text"
                    placeholder="할 일 추가하기..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit" class="add-btn" aria-label="할 일 추가">"+"</button>
            </form>
        </section>
    }
}
