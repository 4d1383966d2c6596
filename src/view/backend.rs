//! Backend port used by the view model.

use crate::task::{
    domain::{DeletedTask, DeletedTaskId, Task, TaskId},
    ports::{DeletedTaskRepository, TaskRepository},
    services::{
        CreateTaskRequest, TaskLifecycleResult, TaskLifecycleService, UpdateTaskStatusRequest,
    },
};
use async_trait::async_trait;
use mockable::Clock;

/// Lifecycle operations the view can issue.
#[async_trait]
pub trait TaskBoardBackend: Send + Sync {
    /// Fetches the active list.
    async fn list_active(&self) -> TaskLifecycleResult<Vec<Task>>;

    /// Fetches the deleted list.
    async fn list_deleted(&self) -> TaskLifecycleResult<Vec<DeletedTask>>;

    /// Creates a task.
    async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task>;

    /// Changes a task's status.
    async fn update_status(&self, request: UpdateTaskStatusRequest) -> TaskLifecycleResult<Task>;

    /// Soft-deletes a task.
    async fn soft_delete(&self, task_id: TaskId) -> TaskLifecycleResult<DeletedTask>;

    /// Restores a deleted task.
    async fn restore(&self, deleted_task_id: DeletedTaskId) -> TaskLifecycleResult<Task>;

    /// Permanently removes a deleted task.
    async fn purge(&self, deleted_task_id: DeletedTaskId) -> TaskLifecycleResult<()>;
}

#[async_trait]
impl<R, D, C> TaskBoardBackend for TaskLifecycleService<R, D, C>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    async fn list_active(&self) -> TaskLifecycleResult<Vec<Task>> {
        Self::list_active(self).await
    }

    async fn list_deleted(&self) -> TaskLifecycleResult<Vec<DeletedTask>> {
        Self::list_deleted(self).await
    }

    async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        Self::create(self, request).await
    }

    async fn update_status(&self, request: UpdateTaskStatusRequest) -> TaskLifecycleResult<Task> {
        Self::update_status(self, request).await
    }

    async fn soft_delete(&self, task_id: TaskId) -> TaskLifecycleResult<DeletedTask> {
        Self::soft_delete(self, task_id).await
    }

    async fn restore(&self, deleted_task_id: DeletedTaskId) -> TaskLifecycleResult<Task> {
        Self::restore(self, deleted_task_id).await
    }

    async fn purge(&self, deleted_task_id: DeletedTaskId) -> TaskLifecycleResult<()> {
        Self::purge(self, deleted_task_id).await
    }
}
