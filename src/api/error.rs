//! HTTP error mapping for the REST surface.

use super::dto::ErrorResponse;
use crate::task::{
    domain::{ParseTaskStatusError, TaskDomainError},
    services::TaskLifecycleError,
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced to HTTP clients.
///
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Bad input shape or value. Rendered as 400.
    #[error("{0}")]
    Validation(String),

    /// The referenced record does not exist. Rendered as 404.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected store failure. Rendered as 500.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Domain(domain) => domain.into(),
            TaskLifecycleError::TaskNotFound(_) => Self::NotFound("Task not found".to_owned()),
            TaskLifecycleError::DeletedTaskNotFound(_) => {
                Self::NotFound("Deleted task not found".to_owned())
            }
            TaskLifecycleError::Repository(repository) => Self::Internal(repository.to_string()),
        }
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ParseTaskStatusError> for ApiError {
    fn from(err: ParseTaskStatusError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(message) => tracing::error!(error = %message, "request failed"),
            Self::Validation(message) | Self::NotFound(message) => {
                tracing::debug!(status = status.as_u16(), error = %message, "request rejected");
            }
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
