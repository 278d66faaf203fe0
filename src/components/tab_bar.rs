//! Tab Bar Component
//!
//! Floating bottom bar switching between the two lists and the battle view.

use leptos::prelude::*;

use crate::context::{AppContext, Tab};

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="tab-bar-dock">
            <nav class="tab-bar" role="tablist">
                {Tab::ALL.iter().map(|&tab| {
                    let is_active = move || ctx.active_tab.get() == tab;
                    view! {
                        <button
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                            on:click=move |_| ctx.select_tab(tab)
                        >
                            <span class="tab-icon">{tab.icon()}</span>
                            <span class="tab-label">{tab.label()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}
