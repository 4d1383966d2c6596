//! When steps for soft-delete and restore BDD scenarios.

use super::world::{SoftDeleteWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskdesk::task::domain::DeletedTaskId;

#[when("the task is soft-deleted")]
fn soft_delete_task(world: &mut SoftDeleteWorld) -> Result<(), eyre::Report> {
    let task_id = world.original()?.id();
    let deleted = run_async(world.service.soft_delete(task_id)).wrap_err("soft-delete task")?;
    world.deleted_task = Some(deleted);
    Ok(())
}

#[when("the deleted task is restored")]
fn restore_deleted_task(world: &mut SoftDeleteWorld) -> Result<(), eyre::Report> {
    let deleted_id = world.deleted()?.id();
    let restored = run_async(world.service.restore(deleted_id)).wrap_err("restore task")?;
    world.restored_task = Some(restored);
    Ok(())
}

#[when("the deleted task is purged")]
fn purge_deleted_task(world: &mut SoftDeleteWorld) -> Result<(), eyre::Report> {
    let deleted_id = world.deleted()?.id();
    run_async(world.service.purge(deleted_id)).wrap_err("purge deleted task")?;
    Ok(())
}

#[when("an unknown deleted task is restored")]
fn restore_unknown_deleted_task(world: &mut SoftDeleteWorld) {
    if let Err(err) = run_async(world.service.restore(DeletedTaskId::new())) {
        world.last_error = Some(err);
    }
}
