//! Service layer for creating, updating, soft-deleting and restoring tasks.

use crate::task::{
    domain::{
        DeletedTask, DeletedTaskId, Task, TaskDomainError, TaskId, TaskStatus, TaskTitle,
    },
    ports::{DeletedTaskRepository, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for changing a task's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateTaskStatusRequest {
    task_id: TaskId,
    status: TaskStatus,
}

impl UpdateTaskStatusRequest {
    /// Creates a status update request.
    #[must_use]
    pub const fn new(task_id: TaskId, status: TaskStatus) -> Self {
        Self { task_id, status }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The active task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The deleted task does not exist.
    #[error("deleted task not found: {0}")]
    DeletedTaskNotFound(DeletedTaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::TaskNotFound(id) => Self::TaskNotFound(id),
            TaskRepositoryError::DeletedTaskNotFound(id) => Self::DeletedTaskNotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Soft-delete and restore copy a record into the other store and then
/// remove the source record. The two writes are not atomic: when the removal
/// fails, the record is left in both stores and the error is returned.
pub struct TaskLifecycleService<R, D, C>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    deleted_tasks: Arc<D>,
    clock: Arc<C>,
}

impl<R, D, C> Clone for TaskLifecycleService<R, D, C>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            deleted_tasks: Arc::clone(&self.deleted_tasks),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, D, C> TaskLifecycleService<R, D, C>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service over the two stores.
    #[must_use]
    pub const fn new(tasks: Arc<R>, deleted_tasks: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            deleted_tasks,
            clock,
        }
    }

    /// Returns every active task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store is
    /// unavailable.
    pub async fn list_active(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.list().await?)
    }

    /// Creates a new pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is blank, or
    /// [`TaskLifecycleError::Repository`] when the store rejects the write.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let task = Task::new(title, request.description, &*self.clock);
        self.tasks.store(&task).await?;
        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Sets the status of an active task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist, or [`TaskLifecycleError::Repository`] on store failure.
    pub async fn update_status(
        &self,
        request: UpdateTaskStatusRequest,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self
            .tasks
            .find_by_id(request.task_id)
            .await?
            .ok_or(TaskLifecycleError::TaskNotFound(request.task_id))?;

        if task.update_status(request.status, &*self.clock) {
            self.tasks.update(&task).await?;
            info!(task_id = %task.id(), status = %task.status(), "task status updated");
        } else {
            debug!(task_id = %task.id(), status = %task.status(), "task status unchanged");
        }
        Ok(task)
    }

    /// Moves an active task to the deleted list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist, or [`TaskLifecycleError::Repository`] when either write fails.
    pub async fn soft_delete(&self, task_id: TaskId) -> TaskLifecycleResult<DeletedTask> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::TaskNotFound(task_id))?;

        let deleted = DeletedTask::from_task(&task, &*self.clock);
        self.deleted_tasks.store(&deleted).await?;

        if let Err(err) = self.tasks.remove(task_id).await {
            warn!(
                %task_id,
                deleted_task_id = %deleted.id(),
                error = %err,
                "task copied to deleted list but not removed from active list"
            );
            return Err(err.into());
        }

        info!(%task_id, deleted_task_id = %deleted.id(), "task soft-deleted");
        Ok(deleted)
    }

    /// Returns every soft-deleted task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store is
    /// unavailable.
    pub async fn list_deleted(&self) -> TaskLifecycleResult<Vec<DeletedTask>> {
        Ok(self.deleted_tasks.list().await?)
    }

    /// Moves a deleted task back to the active list under a new identity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::DeletedTaskNotFound`] when the deleted
    /// record does not exist, or [`TaskLifecycleError::Repository`] when
    /// either write fails.
    pub async fn restore(&self, deleted_task_id: DeletedTaskId) -> TaskLifecycleResult<Task> {
        let deleted = self
            .deleted_tasks
            .find_by_id(deleted_task_id)
            .await?
            .ok_or(TaskLifecycleError::DeletedTaskNotFound(deleted_task_id))?;

        let restored = Task::restored_from(&deleted, &*self.clock);
        self.tasks.store(&restored).await?;

        if let Err(err) = self.deleted_tasks.remove(deleted_task_id).await {
            warn!(
                %deleted_task_id,
                task_id = %restored.id(),
                error = %err,
                "task restored to active list but not removed from deleted list"
            );
            return Err(err.into());
        }

        info!(%deleted_task_id, task_id = %restored.id(), "task restored");
        Ok(restored)
    }

    /// Permanently removes a deleted task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::DeletedTaskNotFound`] when the deleted
    /// record does not exist, or [`TaskLifecycleError::Repository`] on store
    /// failure.
    pub async fn purge(&self, deleted_task_id: DeletedTaskId) -> TaskLifecycleResult<()> {
        self.deleted_tasks.remove(deleted_task_id).await?;
        info!(%deleted_task_id, "deleted task purged");
        Ok(())
    }
}
