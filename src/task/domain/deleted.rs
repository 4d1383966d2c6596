//! Soft-deleted task aggregate.

use super::{DeletedTaskId, Task, TaskStatus, TaskTitle, task::stored_now};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A task that has been moved to the deleted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedTask {
    id: DeletedTaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    deleted_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted deleted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDeletedTaskData {
    /// Persisted deleted-task identifier.
    pub id: DeletedTaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted status at deletion time.
    pub status: TaskStatus,
    /// Persisted deletion timestamp.
    pub deleted_at: DateTime<Utc>,
    /// Persisted record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted record update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl DeletedTask {
    /// Copies an active task into a new deleted record stamped with the
    /// current time.
    #[must_use]
    pub fn from_task(task: &Task, clock: &impl Clock) -> Self {
        let timestamp = stored_now(clock);
        Self {
            id: DeletedTaskId::new(),
            title: task.title().clone(),
            description: task.description().map(ToOwned::to_owned),
            status: task.status(),
            deleted_at: timestamp,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a deleted task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedDeletedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            deleted_at: data.deleted_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the deleted-task identifier.
    #[must_use]
    pub const fn id(&self) -> DeletedTaskId {
        self.id
    }

    /// Returns the title copied from the original task.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description copied from the original task.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the status the task had when it was deleted.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the deletion timestamp.
    #[must_use]
    pub const fn deleted_at(&self) -> DateTime<Utc> {
        self.deleted_at
    }

    /// Returns the record creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the record update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
