//! Task Actions
//!
//! Repository calls paired with the store mutation each one produces once it
//! resolves. Nothing is applied optimistically: a failed call yields an error
//! and leaves the store as it was.

use tracing::{debug, info};

use crate::api::TaskRepository;
use crate::dnd::{translate_drop, DropDecision, DropEvent, MoveRequest};
use crate::error::ApiError;
use crate::form::TaskSubmission;
use crate::models::{TaskDraft, TaskId};
use crate::store::TaskMutation;

pub async fn fetch_tasks<R>(repo: &R) -> Result<TaskMutation, ApiError>
where
    R: TaskRepository + ?Sized,
{
    let tasks = repo.list().await?;
    info!(count = tasks.len(), "[APP] Loaded tasks");
    Ok(TaskMutation::SetAll(tasks))
}

pub async fn create_task<R>(repo: &R, draft: &TaskDraft) -> Result<TaskMutation, ApiError>
where
    R: TaskRepository + ?Sized,
{
    Ok(TaskMutation::Add(repo.create(draft).await?))
}

pub async fn update_task<R>(repo: &R, id: TaskId, draft: &TaskDraft) -> Result<TaskMutation, ApiError>
where
    R: TaskRepository + ?Sized,
{
    Ok(TaskMutation::Update(repo.update(id, draft).await?))
}

pub async fn delete_task<R>(repo: &R, id: TaskId) -> Result<TaskMutation, ApiError>
where
    R: TaskRepository + ?Sized,
{
    Ok(TaskMutation::Remove(repo.delete(id).await?))
}

/// Patch the column; the store takes the column the server reports back
pub async fn move_task<R>(repo: &R, request: MoveRequest) -> Result<TaskMutation, ApiError>
where
    R: TaskRepository + ?Sized,
{
    let task = repo.patch_column(request.task_id, request.column).await?;
    Ok(TaskMutation::Move {
        id: task.id,
        column: task.column,
    })
}

/// Handle a finished drag: only a real move reaches the repository.
///
/// `on_send` runs right before the patch goes out. Returns None when the drop
/// sends nothing.
pub async fn drop_task<R, S>(repo: &R, event: &DropEvent, on_send: S) -> Option<Result<TaskMutation, ApiError>>
where
    R: TaskRepository + ?Sized,
    S: FnOnce(MoveRequest),
{
    match translate_drop(event) {
        DropDecision::Move(request) => {
            info!(task_id = request.task_id, column = %request.column, "[DND] Moving task");
            on_send(request);
            Some(move_task(repo, request).await)
        }
        // Already logged by translate_drop
        DropDecision::Rejected(_) => None,
        decision => {
            debug!(?decision, task_id = event.task_id, "[DND] Drop ignored");
            None
        }
    }
}

/// Send a validated dialog submission
pub async fn submit_task<R>(repo: &R, submission: &TaskSubmission) -> Result<TaskMutation, ApiError>
where
    R: TaskRepository + ?Sized,
{
    match submission {
        TaskSubmission::Create(draft) => create_task(repo, draft).await,
        TaskSubmission::Update(id, draft) => update_task(repo, *id, draft).await,
    }
}
