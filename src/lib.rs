//! Taskdesk: a small task board with soft deletion.
//!
//! Tasks are created, moved between `pending`, `in-progress` and
//! `completed`, soft-deleted into a separate list, and restored from it.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` stores
//!
//! # Modules
//!
//! - [`task`]: Task and deleted-task lifecycle
//! - [`api`]: REST surface over the lifecycle service
//! - [`view`]: Client view model driving the lifecycle operations
//! - [`config`]: Server configuration

pub mod api;
pub mod config;
pub mod task;
pub mod view;
