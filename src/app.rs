//! LoveTodo Frontend App
//!
//! Header, the active tab's content and the bottom tab bar.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::FetchTodoApi;
use crate::components::{BattleDashboard, BirdIcon, TabBar, TodoList};
use crate::config::ApiConfig;
use crate::context::{AppContext, Tab};
use crate::store::{ListStateStoreFields, TodoStore};

/// Header date, e.g. "6월 14일"
pub fn date_label(month: u32, day: u32) -> String {
    format!("{}월 {}일", month, day)
}

fn today_label() -> String {
    let today = js_sys::Date::new_0();
    date_label(today.get_month() + 1, today.get_date())
}

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::resolve();
    log::info!("[APP] Using todo API at {}", config.base_url);

    let store = TodoStore::new(Arc::new(FetchTodoApi::new(&config)));
    let (active_tab, set_active_tab) = signal(Tab::default());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((active_tab, set_active_tab)));

    // Load both lists on mount
    Effect::new(move |_| {
        spawn_local(store.load());
    });

    let state = store.state();

    view! {
        <Show
            when=move || !state.loading().get()
            fallback=|| view! {
                <div class="loading-screen">
                    <p class="muted">"로딩 중..."</p>
                </div>
            }
        >
            <div class="app-layout">
                <div class="app-column">
                    <header class="app-header">
                        <BirdIcon size=44 />
                        <div>
                            <h1 class="app-title">"LoveTodo"</h1>
                            <p class="app-date">{today_label()}</p>
                        </div>
                    </header>

                    {move || state.load_error().get().map(|_| view! {
                        <div class="load-error" role="alert">
                            "할 일을 불러오지 못했어요. 잠시 후 다시 시도해 주세요."
                        </div>
                    })}

                    <main class="tab-content">
                        {move || match active_tab.get() {
                            Tab::List(participant) => view! { <TodoList participant=participant /> }.into_any(),
                            Tab::Battle => view! { <BattleDashboard /> }.into_any(),
                        }}
                    </main>

                    <TabBar />
                </div>
            </div>
        </Show>
    }
}
