//! Task board lifecycle: active tasks, soft deletion and restoration.
//!
//! Active tasks live in one store and soft-deleted tasks in another. The
//! lifecycle service moves records between them, minting a fresh identity on
//! every move. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
