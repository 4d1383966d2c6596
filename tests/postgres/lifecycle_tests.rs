//! Soft-delete and restore through the service over `PostgreSQL` stores.

use crate::postgres::helpers::{service_for, test_pool};
use taskdesk::task::{
    domain::TaskStatus,
    services::{CreateTaskRequest, TaskLifecycleError, UpdateTaskStatusRequest},
};

#[tokio::test(flavor = "multi_thread")]
async fn soft_delete_and_restore_move_rows_between_tables() -> Result<(), eyre::Report> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };
    let service = service_for(&pool);
    let created = service
        .create(CreateTaskRequest::new("Move me").with_description("between tables"))
        .await?;
    service
        .update_status(UpdateTaskStatusRequest::new(
            created.id(),
            TaskStatus::InProgress,
        ))
        .await?;

    let deleted = service.soft_delete(created.id()).await?;
    eyre::ensure!(
        !service
            .list_active()
            .await?
            .iter()
            .any(|task| task.id() == created.id()),
        "soft-deleted row still in tasks"
    );

    let restored = service.restore(deleted.id()).await?;
    eyre::ensure!(restored.id() != created.id(), "restore reused the id");
    eyre::ensure!(
        restored.status() == TaskStatus::InProgress,
        "status not carried through"
    );
    eyre::ensure!(
        !service
            .list_deleted()
            .await?
            .iter()
            .any(|record| record.id() == deleted.id()),
        "restored row still in deleted_tasks"
    );

    let purge_missing = service.purge(deleted.id()).await;
    eyre::ensure!(
        matches!(purge_missing, Err(TaskLifecycleError::DeletedTaskNotFound(_))),
        "expected DeletedTaskNotFound, got {purge_missing:?}"
    );

    let cleanup = service.soft_delete(restored.id()).await?;
    service.purge(cleanup.id()).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn returned_records_match_stored_rows() -> Result<(), eyre::Report> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };
    let service = service_for(&pool);
    let created = service.create(CreateTaskRequest::new("Round trip")).await?;

    let listed = service
        .list_active()
        .await?
        .into_iter()
        .find(|task| task.id() == created.id())
        .ok_or_else(|| eyre::eyre!("created task missing from list"))?;
    eyre::ensure!(
        listed == created,
        "created {created:?} differs from stored {listed:?}"
    );

    let request = UpdateTaskStatusRequest::new(created.id(), TaskStatus::Completed);
    let first = service.update_status(request).await?;
    let second = service.update_status(request).await?;
    eyre::ensure!(
        first == second,
        "repeated update changed the record: {first:?} then {second:?}"
    );

    let deleted = service.soft_delete(created.id()).await?;
    let stored_deleted = service
        .list_deleted()
        .await?
        .into_iter()
        .find(|record| record.id() == deleted.id())
        .ok_or_else(|| eyre::eyre!("deleted record missing from list"))?;
    eyre::ensure!(
        stored_deleted == deleted,
        "deleted {deleted:?} differs from stored {stored_deleted:?}"
    );

    service.purge(deleted.id()).await?;
    Ok(())
}
