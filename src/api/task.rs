//! REST Task Repository
//!
//! json-server style resource at `{base_url}/tasks`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::timer::with_timeout;
use super::retry::{retry, RetryPolicy};
use super::TaskRepository;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Column, ColumnPatch, Task, TaskDraft, TaskId};

/// Task repository over HTTP + JSON
#[derive(Clone, Debug)]
pub struct HttpTaskRepository {
    client: Client,
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl HttpTaskRepository {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            timeout: config.timeout,
            retry: config.retry,
        }
    }

    pub fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    pub fn task_url(&self, id: TaskId) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }

    /// Send one request under the timeout; non-2xx becomes `ApiError::Status`
    async fn send_once(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = with_timeout(request.send(), self.timeout).await??;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
            body
        };
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Send with the retry policy. `idempotent` must be false for requests that
    /// are unsafe to replay (POST).
    async fn send<B>(&self, idempotent: bool, build: B) -> Result<Response, ApiError>
    where
        B: Fn(&Client) -> RequestBuilder,
    {
        retry(self.retry, idempotent, || self.send_once(build(&self.client))).await
    }

    async fn send_json<T, B>(&self, idempotent: bool, build: B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Fn(&Client) -> RequestBuilder,
    {
        let response = self.send(idempotent, build).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait(?Send)]
impl TaskRepository for HttpTaskRepository {
    async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.tasks_url();
        debug!(%url, "[API] GET tasks");
        self.send_json(true, |client| client.get(&url)).await
    }

    async fn create(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        let url = self.tasks_url();
        debug!(%url, title = %draft.title, "[API] POST task");
        self.send_json(false, |client| client.post(&url).json(draft)).await
    }

    async fn update(&self, id: TaskId, draft: &TaskDraft) -> Result<Task, ApiError> {
        let url = self.task_url(id);
        debug!(%url, "[API] PUT task");
        self.send_json(true, |client| client.put(&url).json(draft)).await
    }

    async fn patch_column(&self, id: TaskId, column: Column) -> Result<Task, ApiError> {
        let url = self.task_url(id);
        let body = ColumnPatch { column };
        debug!(%url, %column, "[API] PATCH task column");
        self.send_json(true, |client| client.patch(&url).json(&body)).await
    }

    async fn delete(&self, id: TaskId) -> Result<TaskId, ApiError> {
        let url = self.task_url(id);
        debug!(%url, "[API] DELETE task");
        self.send(true, |client| client.delete(&url)).await?;
        Ok(id)
    }
}
