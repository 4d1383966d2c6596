//! `PostgreSQL` adapters for the active and deleted task stores.

mod deleted_repository;
mod models;
mod repository;
mod schema;

pub use deleted_repository::PostgresDeletedTaskRepository;
pub use repository::{PostgresTaskRepository, TaskPgPool, apply_schema};
