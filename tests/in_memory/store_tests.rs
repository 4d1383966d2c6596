//! Contract tests for the in-memory store adapters.

use super::helpers::clock;
use mockable::DefaultClock;
use rstest::rstest;
use taskdesk::task::{
    adapters::memory::{InMemoryDeletedTaskRepository, InMemoryTaskRepository},
    domain::{DeletedTask, DeletedTaskId, Task, TaskId, TaskStatus, TaskTitle},
    ports::{DeletedTaskRepository, TaskRepository, TaskRepositoryError},
};

fn task(title: &str, clock: &DefaultClock) -> Task {
    Task::new(TaskTitle::new(title).expect("valid title"), None, clock)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_store_lists_in_insertion_order(clock: DefaultClock) {
    let repo = InMemoryTaskRepository::new();
    let first = task("first", &clock);
    let second = task("second", &clock);
    let third = task("third", &clock);
    for item in [&first, &second, &third] {
        repo.store(item).await.expect("store");
    }

    repo.remove(second.id()).await.expect("remove");

    let listed = repo.list().await.expect("list");
    assert_eq!(listed, vec![first, third]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_store_rejects_duplicate_ids(clock: DefaultClock) {
    let repo = InMemoryTaskRepository::new();
    let item = task("only once", &clock);
    repo.store(&item).await.expect("first store");

    let result = repo.store(&item).await;

    assert!(matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == item.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_store_update_and_remove_require_existing_record(clock: DefaultClock) {
    let repo = InMemoryTaskRepository::new();
    let item = task("ghost", &clock);

    assert!(matches!(
        repo.update(&item).await,
        Err(TaskRepositoryError::TaskNotFound(_))
    ));
    assert!(matches!(
        repo.remove(TaskId::new()).await,
        Err(TaskRepositoryError::TaskNotFound(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_store_update_replaces_record(clock: DefaultClock) {
    let repo = InMemoryTaskRepository::new();
    let mut item = task("to update", &clock);
    repo.store(&item).await.expect("store");

    assert!(item.update_status(TaskStatus::Completed, &clock));
    repo.update(&item).await.expect("update");

    let found = repo.find_by_id(item.id()).await.expect("find");
    assert_eq!(found, Some(item));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_store_round_trip(clock: DefaultClock) {
    let repo = InMemoryDeletedTaskRepository::new();
    let deleted = DeletedTask::from_task(&task("archived", &clock), &clock);
    repo.store(&deleted).await.expect("store");

    assert_eq!(
        repo.find_by_id(deleted.id()).await.expect("find"),
        Some(deleted.clone())
    );
    assert!(matches!(
        repo.store(&deleted).await,
        Err(TaskRepositoryError::DuplicateDeletedTask(_))
    ));

    repo.remove(deleted.id()).await.expect("remove");
    assert!(repo.list().await.expect("list").is_empty());
    assert!(matches!(
        repo.remove(DeletedTaskId::new()).await,
        Err(TaskRepositoryError::DeletedTaskNotFound(_))
    ));
}
