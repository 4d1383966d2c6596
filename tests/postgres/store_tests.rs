//! Contract tests for the `PostgreSQL` store adapters.

use std::time::Duration;

use crate::postgres::helpers::{clock, test_pool};
use mockable::DefaultClock;
use rstest::rstest;
use taskdesk::task::{
    adapters::postgres::{PostgresDeletedTaskRepository, PostgresTaskRepository},
    domain::{DeletedTask, DeletedTaskId, Task, TaskId, TaskStatus, TaskTitle},
    ports::{DeletedTaskRepository, TaskRepository, TaskRepositoryError},
};

fn task(title: &str, description: Option<&str>, clock: &DefaultClock) -> Result<Task, eyre::Report> {
    Ok(Task::new(
        TaskTitle::new(title)?,
        description.map(ToOwned::to_owned),
        clock,
    ))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_store_round_trips_and_updates(clock: DefaultClock) -> Result<(), eyre::Report> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(pool);
    let mut item = task("Persisted", Some("with description"), &clock)?;

    repo.store(&item).await?;
    let found = repo.find_by_id(item.id()).await?;
    eyre::ensure!(
        found.as_ref().map(Task::id) == Some(item.id()),
        "stored task not found"
    );
    eyre::ensure!(
        found.as_ref().and_then(Task::description) == Some("with description"),
        "description not persisted"
    );

    eyre::ensure!(item.update_status(TaskStatus::Completed, &clock), "status unchanged");
    repo.update(&item).await?;
    let updated = repo.find_by_id(item.id()).await?;
    eyre::ensure!(
        updated.as_ref().map(Task::status) == Some(TaskStatus::Completed),
        "status update not persisted"
    );

    repo.remove(item.id()).await?;
    eyre::ensure!(
        repo.find_by_id(item.id()).await?.is_none(),
        "removed task still present"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_store_reports_duplicates_and_missing_rows(
    clock: DefaultClock,
) -> Result<(), eyre::Report> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(pool);
    let item = task("Duplicate", None, &clock)?;
    repo.store(&item).await?;

    let duplicate = repo.store(&item).await;
    eyre::ensure!(
        matches!(duplicate, Err(TaskRepositoryError::DuplicateTask(_))),
        "expected DuplicateTask, got {duplicate:?}"
    );
    let missing = repo.remove(TaskId::new()).await;
    eyre::ensure!(
        matches!(missing, Err(TaskRepositoryError::TaskNotFound(_))),
        "expected TaskNotFound, got {missing:?}"
    );

    repo.remove(item.id()).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_store_lists_in_creation_order(clock: DefaultClock) -> Result<(), eyre::Report> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(pool);
    let first = task("first", None, &clock)?;
    std::thread::sleep(Duration::from_millis(5));
    let second = task("second", None, &clock)?;
    repo.store(&first).await?;
    repo.store(&second).await?;

    let ids: Vec<TaskId> = repo
        .list()
        .await?
        .iter()
        .map(Task::id)
        .filter(|id| *id == first.id() || *id == second.id())
        .collect();
    eyre::ensure!(
        ids == vec![first.id(), second.id()],
        "unexpected order {ids:?}"
    );

    repo.remove(first.id()).await?;
    repo.remove(second.id()).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_store_round_trips(clock: DefaultClock) -> Result<(), eyre::Report> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };
    let repo = PostgresDeletedTaskRepository::new(pool);
    let deleted = DeletedTask::from_task(&task("Archived", None, &clock)?, &clock);

    repo.store(&deleted).await?;
    let found = repo.find_by_id(deleted.id()).await?;
    eyre::ensure!(
        found.as_ref().map(|record| record.title().as_str()) == Some("Archived"),
        "deleted record not persisted"
    );

    repo.remove(deleted.id()).await?;
    let missing = repo.remove(DeletedTaskId::new()).await;
    eyre::ensure!(
        matches!(missing, Err(TaskRepositoryError::DeletedTaskNotFound(_))),
        "expected DeletedTaskNotFound, got {missing:?}"
    );
    Ok(())
}
