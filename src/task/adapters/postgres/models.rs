//! Diesel row models for task persistence.

use super::schema::{deleted_tasks, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for active task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for active task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for deleted task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = deleted_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DeletedTaskRow {
    /// Deleted-task identifier.
    pub id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Status at deletion time.
    pub status: String,
    /// Deletion timestamp.
    pub deleted_at: DateTime<Utc>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Record update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for deleted task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = deleted_tasks)]
pub struct NewDeletedTaskRow {
    /// Deleted-task identifier.
    pub id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Status at deletion time.
    pub status: String,
    /// Deletion timestamp.
    pub deleted_at: DateTime<Utc>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Record update timestamp.
    pub updated_at: DateTime<Utc>,
}
