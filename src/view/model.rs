//! View state machine.

use super::TaskBoardBackend;
use crate::task::{
    domain::{DeletedTask, DeletedTaskId, Task, TaskId, TaskStatus},
    services::{CreateTaskRequest, TaskLifecycleError, UpdateTaskStatusRequest},
};
use thiserror::Error;

/// Which list the view is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// The active task list.
    #[default]
    Active,
    /// The deleted task list.
    Deleted,
}

/// Edit state of the active list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditState {
    /// No row is being edited.
    #[default]
    Idle,
    /// One row is being edited with a pending status choice.
    Editing {
        /// Task under edit.
        task_id: TaskId,
        /// Status chosen in the edit buffer.
        status: TaskStatus,
    },
}

/// Errors raised by view actions.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The backend rejected the operation.
    #[error(transparent)]
    Backend(#[from] TaskLifecycleError),

    /// The task is not in the last fetched active list.
    #[error("task {0} is not in the active list")]
    UnknownTask(TaskId),

    /// An edit action was issued while no row is in edit mode.
    #[error("no task is being edited")]
    NotEditing,
}

/// Result type for view actions.
pub type ViewResult<T> = Result<T, ViewError>;

/// Task board view model.
#[derive(Debug)]
pub struct TaskBoardView<B> {
    backend: B,
    mode: ViewMode,
    edit: EditState,
    draft_title: String,
    draft_description: String,
    active: Vec<Task>,
    deleted: Vec<DeletedTask>,
}

impl<B: TaskBoardBackend> TaskBoardView<B> {
    /// Creates a view in active mode with empty lists.
    ///
    /// Call [`Self::load`] to perform the initial fetch.
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            mode: ViewMode::Active,
            edit: EditState::Idle,
            draft_title: String::new(),
            draft_description: String::new(),
            active: Vec::new(),
            deleted: Vec::new(),
        }
    }

    /// Fetches the list for the current mode.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Backend`] when the fetch fails.
    pub async fn load(&mut self) -> ViewResult<()> {
        match self.mode {
            ViewMode::Active => self.refresh_active().await,
            ViewMode::Deleted => self.refresh_deleted().await,
        }
    }

    /// Switches to the active list and refetches it.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Backend`] when the fetch fails.
    pub async fn show_active(&mut self) -> ViewResult<()> {
        self.mode = ViewMode::Active;
        self.edit = EditState::Idle;
        self.refresh_active().await
    }

    /// Switches to the deleted list and refetches it.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Backend`] when the fetch fails.
    pub async fn show_deleted(&mut self) -> ViewResult<()> {
        self.mode = ViewMode::Deleted;
        self.edit = EditState::Idle;
        self.refresh_deleted().await
    }

    /// Replaces the new-task title buffer.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft_title = title.into();
    }

    /// Replaces the new-task description buffer.
    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft_description = description.into();
    }

    /// Submits the new-task form.
    ///
    /// Returns `Ok(None)` without contacting the backend when the title
    /// buffer is blank. On success the buffers are cleared and the active
    /// list is refetched.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Backend`] when creation or the refetch fails.
    pub async fn add_task(&mut self) -> ViewResult<Option<Task>> {
        if self.draft_title.trim().is_empty() {
            return Ok(None);
        }
        let mut request = CreateTaskRequest::new(self.draft_title.clone());
        if !self.draft_description.trim().is_empty() {
            request = request.with_description(self.draft_description.clone());
        }

        let created = self.backend.create(request).await?;
        self.draft_title.clear();
        self.draft_description.clear();
        self.refresh_active().await?;
        Ok(Some(created))
    }

    /// Puts an active row into edit mode, seeding the buffer with its
    /// current status.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnknownTask`] when the task is not in the last
    /// fetched active list.
    pub fn start_edit(&mut self, task_id: TaskId) -> ViewResult<()> {
        let task = self
            .active
            .iter()
            .find(|task| task.id() == task_id)
            .ok_or(ViewError::UnknownTask(task_id))?;
        self.edit = EditState::Editing {
            task_id,
            status: task.status(),
        };
        Ok(())
    }

    /// Changes the status held in the edit buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NotEditing`] when no row is in edit mode.
    pub const fn set_edit_status(&mut self, status: TaskStatus) -> ViewResult<()> {
        match &mut self.edit {
            EditState::Editing {
                status: buffered, ..
            } => {
                *buffered = status;
                Ok(())
            }
            EditState::Idle => Err(ViewError::NotEditing),
        }
    }

    /// Leaves edit mode without saving.
    pub const fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    /// Saves the edit buffer, leaves edit mode and refetches the active list.
    ///
    /// The view stays in edit mode when the update fails.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NotEditing`] when no row is in edit mode, or
    /// [`ViewError::Backend`] when the update or the refetch fails.
    pub async fn save_edit(&mut self) -> ViewResult<Task> {
        let EditState::Editing { task_id, status } = self.edit else {
            return Err(ViewError::NotEditing);
        };
        let updated = self
            .backend
            .update_status(UpdateTaskStatusRequest::new(task_id, status))
            .await?;
        self.edit = EditState::Idle;
        self.refresh_active().await?;
        Ok(updated)
    }

    /// Soft-deletes a task and refetches the active list.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Backend`] when the deletion or the refetch fails.
    pub async fn delete_task(&mut self, task_id: TaskId) -> ViewResult<()> {
        self.backend.soft_delete(task_id).await?;
        if matches!(self.edit, EditState::Editing { task_id: editing, .. } if editing == task_id) {
            self.edit = EditState::Idle;
        }
        self.refresh_active().await
    }

    /// Restores a deleted task and refetches both lists.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Backend`] when the restore or a refetch fails.
    pub async fn restore_task(&mut self, deleted_task_id: DeletedTaskId) -> ViewResult<Task> {
        let restored = self.backend.restore(deleted_task_id).await?;
        self.refresh_deleted().await?;
        self.refresh_active().await?;
        Ok(restored)
    }

    /// Permanently removes a deleted task and refetches the deleted list.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Backend`] when the purge or the refetch fails.
    pub async fn purge_task(&mut self, deleted_task_id: DeletedTaskId) -> ViewResult<()> {
        self.backend.purge(deleted_task_id).await?;
        self.refresh_deleted().await
    }

    async fn refresh_active(&mut self) -> ViewResult<()> {
        self.active = self.backend.list_active().await?;
        Ok(())
    }

    async fn refresh_deleted(&mut self) -> ViewResult<()> {
        self.deleted = self.backend.list_deleted().await?;
        Ok(())
    }
}

impl<B> TaskBoardView<B> {
    /// Returns the list currently shown.
    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Returns the edit state.
    #[must_use]
    pub const fn edit_state(&self) -> EditState {
        self.edit
    }

    /// Returns the last fetched active list.
    #[must_use]
    pub fn active_tasks(&self) -> &[Task] {
        &self.active
    }

    /// Returns the last fetched deleted list.
    #[must_use]
    pub fn deleted_tasks(&self) -> &[DeletedTask] {
        &self.deleted
    }

    /// Returns the new-task title buffer.
    #[must_use]
    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    /// Returns the new-task description buffer.
    #[must_use]
    pub fn draft_description(&self) -> &str {
        &self.draft_description
    }

    /// Returns the backend handle.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}
