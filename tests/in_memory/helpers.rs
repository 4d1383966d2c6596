//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdesk::task::{
    adapters::memory::{InMemoryDeletedTaskRepository, InMemoryTaskRepository},
    services::TaskLifecycleService,
};

/// Lifecycle service over fresh in-memory stores.
pub type TestService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryDeletedTaskRepository, DefaultClock>;

/// Provides a [`DefaultClock`] for test fixtures.
#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

/// Provides a lifecycle service over empty in-memory stores.
#[fixture]
pub fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(InMemoryDeletedTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}
