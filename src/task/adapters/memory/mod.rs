//! In-memory task stores for tests and single-process deployments.

mod deleted_task;
mod task;

pub use deleted_task::InMemoryDeletedTaskRepository;
pub use task::InMemoryTaskRepository;

use crate::task::ports::TaskRepositoryError;
use std::sync::PoisonError;

fn poisoned<T>(err: &PoisonError<T>) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}
