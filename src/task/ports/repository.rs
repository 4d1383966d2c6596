//! Repository ports for the active and deleted task stores.

use crate::task::domain::{DeletedTask, DeletedTaskId, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Active task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (status and timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every active task in creation order.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Deleted task persistence contract.
#[async_trait]
pub trait DeletedTaskRepository: Send + Sync {
    /// Stores a new deleted record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateDeletedTask`] when the ID
    /// already exists.
    async fn store(&self, task: &DeletedTask) -> TaskRepositoryResult<()>;

    /// Finds a deleted record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: DeletedTaskId) -> TaskRepositoryResult<Option<DeletedTask>>;

    /// Returns every deleted record in deletion order.
    async fn list(&self) -> TaskRepositoryResult<Vec<DeletedTask>>;

    /// Removes a deleted record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DeletedTaskNotFound`] when the record
    /// does not exist.
    async fn remove(&self, id: DeletedTaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A deleted task with the same identifier already exists.
    #[error("duplicate deleted task identifier: {0}")]
    DuplicateDeletedTask(DeletedTaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The deleted task was not found.
    #[error("deleted task not found: {0}")]
    DeletedTaskNotFound(DeletedTaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
