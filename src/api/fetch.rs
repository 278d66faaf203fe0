//! Fetch-based Todo API client
//!
//! Talks to the todo service with the browser Fetch API.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::TodoApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateTodoArgs, Participant, TodoItem, TodoLists};

/// Characters escaped in an id path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub struct FetchTodoApi {
    base_url: String,
}

impl FetchTodoApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn collection_url(&self, participant: Participant) -> String {
        format!("{}/todos/{}", self.base_url, participant.as_str())
    }

    fn item_url(&self, participant: Participant, id: &str) -> String {
        format!(
            "{}/{}",
            self.collection_url(participant),
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }

    fn window() -> ApiResult<web_sys::Window> {
        web_sys::window().ok_or_else(|| ApiError::Platform("No global `window` object found".to_string()))
    }

    fn build_request(method: &str, url: &str, json_body: Option<String>) -> ApiResult<Request> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let has_body = json_body.is_some();
        if let Some(body) = json_body {
            opts.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| ApiError::Platform(format!("Request creation failed: {:?}", e)))?;

        if has_body {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(|e| ApiError::Platform(format!("set Content-Type failed: {:?}", e)))?;
        }

        Ok(request)
    }

    /// Perform the request and reject non-2xx answers
    async fn send(method: &str, url: &str, json_body: Option<String>) -> ApiResult<Response> {
        let request = Self::build_request(method, url, json_body)?;
        let window = Self::window()?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(format!("{} {} failed: {:?}", method, url, e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::Platform("fetch did not return a Response".to_string()))?;

        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
                url: url.to_string(),
            });
        }
        Ok(resp)
    }

    async fn read_json<T: DeserializeOwned>(resp: &Response) -> ApiResult<T> {
        let promise = resp
            .json()
            .map_err(|e| ApiError::Decode(format!("json() failed: {:?}", e)))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| ApiError::Decode(format!("body is not JSON: {:?}", e)))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl TodoApi for FetchTodoApi {
    async fn list_all(&self) -> ApiResult<TodoLists> {
        let url = self.todos_url();
        let resp = Self::send("GET", &url, None).await?;
        let lists: TodoLists = Self::read_json(&resp).await?;
        log::debug!(
            "[API] Fetched {} boy / {} girl todos",
            lists.of(Participant::Boy).len(),
            lists.of(Participant::Girl).len()
        );
        Ok(lists)
    }

    async fn create(&self, participant: Participant, text: &str) -> ApiResult<TodoItem> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApiError::Validation("todo text must not be blank".to_string()));
        }

        let body = serde_json::to_string(&CreateTodoArgs { text })
            .map_err(|e| ApiError::Platform(e.to_string()))?;
        let resp = Self::send("POST", &self.collection_url(participant), Some(body)).await?;
        Self::read_json(&resp).await
    }

    async fn toggle_completion(&self, participant: Participant, id: &str) -> ApiResult<()> {
        Self::send("PATCH", &self.item_url(participant, id), None).await?;
        Ok(())
    }

    async fn remove(&self, participant: Participant, id: &str) -> ApiResult<()> {
        Self::send("DELETE", &self.item_url(participant, id), None).await?;
        Ok(())
    }
}
