//! Domain model for the task board.
//!
//! Active tasks and soft-deleted tasks are separate aggregates. Moving a
//! record between them always mints a new identity; the domain carries no
//! link from a deleted record back to the task it was copied from.

mod deleted;
mod error;
mod ids;
mod status;
mod task;
mod title;

pub use deleted::{DeletedTask, PersistedDeletedTaskData};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{DeletedTaskId, TaskId};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
pub use title::TaskTitle;
