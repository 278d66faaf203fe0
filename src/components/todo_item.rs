//! Todo Item Component
//!
//! A single row in a participant's list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{Participant, TodoItem};
use crate::store::use_todo_store;

#[component]
pub fn TodoItemRow(
    participant: Participant,
    item: TodoItem,
) -> impl IntoView {
    let store = use_todo_store();

    let completed = item.completed;
    let check_label = if completed { "완료 취소" } else { "완료하기" };
    let toggle_id = item.id.clone();
    let delete_id = item.id;

    let row_class = format!(
        "todo-row {}{}{}",
        participant.as_str(),
        if completed { " completed" } else { "" },
        if item.pending { " pending" } else { "" },
    );

    view! {
        <div class=row_class>
            // Checkbox
            <button
                class="todo-check"
                aria-label=check_label
                on:click=move |_| spawn_local(store.toggle(participant, &toggle_id))
            >
                {completed.then_some("✓")}
            </button>

            // Text
            <span class="todo-text">{item.text}</span>

            // Delete button
            <button
                class="todo-delete"
                aria-label="삭제"
                on:click=move |_| spawn_local(store.remove(participant, &delete_id))
            >
                "🗑"
            </button>
        </div>
    }
}
