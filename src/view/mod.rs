//! Client-side view model for the task board.
//!
//! The view shows either the active list or the deleted list, and at most one
//! active row can be in edit mode. Every user action issues at most one
//! lifecycle operation through a [`TaskBoardBackend`] and then refetches the
//! affected lists; nothing is updated optimistically.

mod backend;
mod model;
mod render;

pub use backend::TaskBoardBackend;
pub use model::{EditState, TaskBoardView, ViewError, ViewMode, ViewResult};
