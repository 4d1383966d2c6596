//! Step definitions for soft-delete and restore scenarios.

mod then;
mod when;
pub mod world;
