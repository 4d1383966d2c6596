//! Shared world state for soft-delete and restore BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdesk::task::{
    adapters::memory::{InMemoryDeletedTaskRepository, InMemoryTaskRepository},
    domain::{DeletedTask, Task},
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryDeletedTaskRepository, DefaultClock>;

/// Scenario world for soft-delete behaviour tests.
pub struct SoftDeleteWorld {
    pub service: TestTaskService,
    pub original_task: Option<Task>,
    pub deleted_task: Option<DeletedTask>,
    pub restored_task: Option<Task>,
    pub last_error: Option<TaskLifecycleError>,
}

impl SoftDeleteWorld {
    /// Creates a world over empty stores.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryDeletedTaskRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            original_task: None,
            deleted_task: None,
            restored_task: None,
            last_error: None,
        }
    }

    /// Returns the task created by the scenario setup.
    pub fn original(&self) -> Result<&Task, eyre::Report> {
        self.original_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing original task in scenario world"))
    }

    /// Returns the deleted record produced by the scenario.
    pub fn deleted(&self) -> Result<&DeletedTask, eyre::Report> {
        self.deleted_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing deleted task in scenario world"))
    }
}

impl Default for SoftDeleteWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SoftDeleteWorld {
    SoftDeleteWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
