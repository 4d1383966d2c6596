//! Diesel schema for task persistence.

diesel::table! {
    /// Active task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Trimmed, non-empty title.
        title -> Text,
        /// Optional description.
        description -> Nullable<Text>,
        /// Task status.
        #[max_length = 32]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Soft-deleted task records.
    deleted_tasks (id) {
        /// Deleted-task identifier.
        id -> Uuid,
        /// Title copied from the active task.
        title -> Text,
        /// Description copied from the active task.
        description -> Nullable<Text>,
        /// Status at deletion time.
        #[max_length = 32]
        status -> Varchar,
        /// Deletion timestamp.
        deleted_at -> Timestamptz,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Record update timestamp.
        updated_at -> Timestamptz,
    }
}
