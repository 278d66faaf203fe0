//! Remote Todo API
//!
//! `TodoApi` is the seam between the list store and the network. The
//! browser implementation lives in `fetch`; tests plug in an in-memory one.

mod fetch;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Participant, TodoItem, TodoLists};

pub use fetch::FetchTodoApi;

#[async_trait(?Send)]
pub trait TodoApi: Send + Sync {
    /// `GET /todos`
    async fn list_all(&self) -> ApiResult<TodoLists>;

    /// `POST /todos/{participant}`, returns the item with its server id
    async fn create(&self, participant: Participant, text: &str) -> ApiResult<TodoItem>;

    /// `PATCH /todos/{participant}/{id}`
    async fn toggle_completion(&self, participant: Participant, id: &str) -> ApiResult<()>;

    /// `DELETE /todos/{participant}/{id}`
    async fn remove(&self, participant: Participant, id: &str) -> ApiResult<()>;
}
