//! Shared test helpers for `PostgreSQL` integration tests.

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use rstest::fixture;
use taskdesk::task::{
    adapters::postgres::{
        PostgresDeletedTaskRepository, PostgresTaskRepository, TaskPgPool, apply_schema,
    },
    services::TaskLifecycleService,
};

/// Environment variable naming the test database.
pub const DATABASE_URL_ENV: &str = "TASKDESK_TEST_DATABASE_URL";

/// Lifecycle service over the `PostgreSQL` stores.
pub type PostgresService =
    TaskLifecycleService<PostgresTaskRepository, PostgresDeletedTaskRepository, DefaultClock>;

/// Provides a [`DefaultClock`] for test fixtures.
#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

/// Builds a small pool against the test database and applies the schema.
///
/// Returns `Ok(None)` when no test database is configured.
///
/// # Errors
///
/// Returns an error if the pool cannot be built or the schema fails to apply.
pub async fn test_pool() -> Result<Option<TaskPgPool>, eyre::Report> {
    let Ok(url) = std::env::var(DATABASE_URL_ENV) else {
        return Ok(None);
    };
    let pool = Pool::builder()
        .max_size(2)
        .build(ConnectionManager::<PgConnection>::new(url))?;
    apply_schema(&pool).await?;
    Ok(Some(pool))
}

/// Builds a lifecycle service over both `PostgreSQL` stores.
#[must_use]
pub fn service_for(pool: &TaskPgPool) -> PostgresService {
    TaskLifecycleService::new(
        Arc::new(PostgresTaskRepository::new(pool.clone())),
        Arc::new(PostgresDeletedTaskRepository::new(pool.clone())),
        Arc::new(DefaultClock),
    )
}
