//! Task API
//!
//! The remote task repository contract and its REST implementation.

mod retry;
mod task;
mod timer;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Column, Task, TaskDraft, TaskId};

// Re-export all public items
pub use retry::*;
pub use task::*;

/// Remote CRUD over task records. The server assigns ids and owns storage.
#[async_trait(?Send)]
pub trait TaskRepository {
    /// All tasks, in server order
    async fn list(&self) -> Result<Vec<Task>, ApiError>;

    async fn create(&self, draft: &TaskDraft) -> Result<Task, ApiError>;

    /// Full replace of title, description and column
    async fn update(&self, id: TaskId, draft: &TaskDraft) -> Result<Task, ApiError>;

    /// Partial update used by drag moves
    async fn patch_column(&self, id: TaskId, column: Column) -> Result<Task, ApiError>;

    /// Returns the deleted id
    async fn delete(&self, id: TaskId) -> Result<TaskId, ApiError>;
}
