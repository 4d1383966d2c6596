//! Plain-text rendering of the current view.

use super::{EditState, TaskBoardView, ViewMode};
use crate::task::domain::{DeletedTask, Task};
use std::fmt;

impl<B> TaskBoardView<B> {
    /// Renders the list for the current mode as plain text.
    ///
    /// The row in edit mode is prefixed with `*` and shows the buffered
    /// status.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<B> fmt::Display for TaskBoardView<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode() {
            ViewMode::Active => write_active(f, self.active_tasks(), self.edit_state()),
            ViewMode::Deleted => write_deleted(f, self.deleted_tasks()),
        }
    }
}

fn write_active(f: &mut fmt::Formatter<'_>, tasks: &[Task], edit: EditState) -> fmt::Result {
    writeln!(f, "Active tasks ({})", tasks.len())?;
    if tasks.is_empty() {
        return writeln!(f, "  No tasks");
    }
    for task in tasks {
        let editing = match edit {
            EditState::Editing { task_id, status } if task_id == task.id() => Some(status),
            _ => None,
        };
        let marker = if editing.is_some() { '*' } else { ' ' };
        write!(f, "{marker} [{}] {}", task.status(), task.title())?;
        if let Some(description) = task.description() {
            write!(f, " - {description}")?;
        }
        if let Some(status) = editing {
            write!(f, " (editing: {status})")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

fn write_deleted(f: &mut fmt::Formatter<'_>, tasks: &[DeletedTask]) -> fmt::Result {
    writeln!(f, "Deleted tasks ({})", tasks.len())?;
    if tasks.is_empty() {
        return writeln!(f, "  No deleted tasks");
    }
    for task in tasks {
        write!(f, "  [{}] {}", task.status(), task.title())?;
        if let Some(description) = task.description() {
            write!(f, " - {description}")?;
        }
        writeln!(
            f,
            " (deleted {})",
            task.deleted_at().format("%Y-%m-%d %H:%M UTC")
        )?;
    }
    Ok(())
}
