//! `PostgreSQL` repository implementation for deleted task storage.

use super::{
    models::{DeletedTaskRow, NewDeletedTaskRow},
    repository::{TaskPgPool, run_blocking},
    schema::deleted_tasks,
};
use crate::task::{
    domain::{DeletedTask, DeletedTaskId, PersistedDeletedTaskData, TaskStatus, TaskTitle},
    ports::{DeletedTaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed deleted task repository.
#[derive(Debug, Clone)]
pub struct PostgresDeletedTaskRepository {
    pool: TaskPgPool,
}

impl PostgresDeletedTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeletedTaskRepository for PostgresDeletedTaskRepository {
    async fn store(&self, task: &DeletedTask) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(deleted_tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateDeletedTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: DeletedTaskId) -> TaskRepositoryResult<Option<DeletedTask>> {
        run_blocking(&self.pool, move |connection| {
            let row = deleted_tasks::table
                .filter(deleted_tasks::id.eq(id.into_inner()))
                .select(DeletedTaskRow::as_select())
                .first::<DeletedTaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_deleted_task).transpose()
        })
        .await
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<DeletedTask>> {
        run_blocking(&self.pool, |connection| {
            let rows = deleted_tasks::table
                .order((deleted_tasks::deleted_at.asc(), deleted_tasks::id.asc()))
                .select(DeletedTaskRow::as_select())
                .load::<DeletedTaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_deleted_task).collect()
        })
        .await
    }

    async fn remove(&self, id: DeletedTaskId) -> TaskRepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let affected =
                diesel::delete(deleted_tasks::table.filter(deleted_tasks::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::DeletedTaskNotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(task: &DeletedTask) -> NewDeletedTaskRow {
    NewDeletedTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        status: task.status().as_str().to_owned(),
        deleted_at: task.deleted_at(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_deleted_task(row: DeletedTaskRow) -> TaskRepositoryResult<DeletedTask> {
    let DeletedTaskRow {
        id,
        title: persisted_title,
        description,
        status: persisted_status,
        deleted_at,
        created_at,
        updated_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;

    Ok(DeletedTask::from_persisted(PersistedDeletedTaskData {
        id: DeletedTaskId::from_uuid(id),
        title,
        description,
        status,
        deleted_at,
        created_at,
        updated_at,
    }))
}
