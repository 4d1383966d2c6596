//! Then steps for soft-delete and restore BDD scenarios.

use super::world::{SoftDeleteWorld, run_async};
use rstest_bdd_macros::then;
use taskdesk::task::{domain::TaskStatus, services::TaskLifecycleError};

fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

#[then("the active list does not contain the task")]
fn active_list_excludes_task(world: &SoftDeleteWorld) -> Result<(), eyre::Report> {
    let task_id = world.original()?.id();
    let active = run_async(world.service.list_active())?;
    if active.iter().any(|task| task.id() == task_id) {
        return Err(eyre::eyre!("task {task_id} is still active"));
    }
    Ok(())
}

#[then(r#"the deleted list contains "{title}" with status "{status}""#)]
fn deleted_list_contains(
    world: &SoftDeleteWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected_status = parse_status(&status)?;
    let deleted = run_async(world.service.list_deleted())?;
    let found = deleted
        .iter()
        .any(|record| record.title().as_str() == title && record.status() == expected_status);
    if !found {
        return Err(eyre::eyre!(
            "no deleted record titled {title:?} with status {expected_status}"
        ));
    }
    Ok(())
}

#[then(r#"the active list contains "{title}" with status "{status}""#)]
fn active_list_contains(
    world: &SoftDeleteWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected_status = parse_status(&status)?;
    let active = run_async(world.service.list_active())?;
    let found = active
        .iter()
        .any(|task| task.title().as_str() == title && task.status() == expected_status);
    if !found {
        return Err(eyre::eyre!(
            "no active task titled {title:?} with status {expected_status}"
        ));
    }
    Ok(())
}

#[then("the restored task has a new identity")]
fn restored_task_has_new_identity(world: &SoftDeleteWorld) -> Result<(), eyre::Report> {
    let original_id = world.original()?.id();
    let restored = world
        .restored_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing restored task"))?;
    if restored.id() == original_id {
        return Err(eyre::eyre!("restored task reused id {original_id}"));
    }
    Ok(())
}

#[then("the deleted list is empty")]
fn deleted_list_is_empty(world: &SoftDeleteWorld) -> Result<(), eyre::Report> {
    let deleted = run_async(world.service.list_deleted())?;
    if !deleted.is_empty() {
        return Err(eyre::eyre!("expected no deleted tasks, found {}", deleted.len()));
    }
    Ok(())
}

#[then("purging it again fails with a not found error")]
fn purging_again_fails(world: &SoftDeleteWorld) -> Result<(), eyre::Report> {
    let deleted_id = world.deleted()?.id();
    let result = run_async(world.service.purge(deleted_id));
    if !matches!(result, Err(TaskLifecycleError::DeletedTaskNotFound(_))) {
        return Err(eyre::eyre!("expected DeletedTaskNotFound, got {result:?}"));
    }
    Ok(())
}

#[then("the operation fails with a deleted task not found error")]
fn operation_fails_with_deleted_not_found(world: &SoftDeleteWorld) -> Result<(), eyre::Report> {
    match world.last_error.as_ref() {
        Some(TaskLifecycleError::DeletedTaskNotFound(_)) => Ok(()),
        other => Err(eyre::eyre!(
            "expected DeletedTaskNotFound error, got {other:?}"
        )),
    }
}
