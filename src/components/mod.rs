//! UI Components
//!
//! Reusable Leptos components.

mod battle_dashboard;
mod bird_icon;
mod tab_bar;
mod todo_item;
mod todo_list;

pub use battle_dashboard::BattleDashboard;
pub use bird_icon::BirdIcon;
pub use tab_bar::TabBar;
pub use todo_item::TodoItemRow;
pub use todo_list::TodoList;
