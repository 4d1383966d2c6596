//! Request and response bodies for the REST surface.
//!
//! Request bodies are parsed into typed service requests before they reach
//! the lifecycle service. Response bodies use camelCase keys.

use super::ApiError;
use crate::task::{
    domain::{DeletedTask, Task, TaskStatus},
    services::CreateTaskRequest,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskBody {
    /// Task title; blank titles are rejected.
    #[serde(default)]
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional status. Must name a valid status when present; new tasks
    /// always start as `pending`.
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateTaskBody {
    /// Validates the body and converts it into a service request.
    ///
    /// Title validation happens in the service so that every caller gets the
    /// same rule.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when `status` is present but unknown.
    pub fn into_request(self) -> Result<CreateTaskRequest, ApiError> {
        if let Some(raw_status) = self.status.as_deref() {
            TaskStatus::try_from(raw_status)?;
        }
        let request = CreateTaskRequest::new(self.title);
        Ok(match self.description {
            Some(description) => request.with_description(description),
            None => request,
        })
    }
}

/// Body of `PUT /api/tasks/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusBody {
    /// Requested status.
    #[serde(default)]
    pub status: String,
}

impl UpdateStatusBody {
    /// Parses the requested status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the status is not one of
    /// `pending`, `in-progress` or `completed`.
    pub fn status(&self) -> Result<TaskStatus, ApiError> {
        Ok(TaskStatus::try_from(self.status.as_str())?)
    }
}

/// Wire representation of an active task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Description, if any.
    #[serde(default)]
    pub description: Option<String>,
    /// Status.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            status: task.status(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Wire representation of a deleted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedTaskResponse {
    /// Deleted-task identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Description, if any.
    #[serde(default)]
    pub description: Option<String>,
    /// Status at deletion time.
    pub status: TaskStatus,
    /// Deletion timestamp.
    pub deleted_at: DateTime<Utc>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Record update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&DeletedTask> for DeletedTaskResponse {
    fn from(task: &DeletedTask) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            status: task.status(),
            deleted_at: task.deleted_at(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Confirmation body for operations without a record payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    /// Creates a confirmation message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a successful restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// The newly created active task.
    pub task: TaskResponse,
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
