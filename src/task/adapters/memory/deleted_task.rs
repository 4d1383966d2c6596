//! In-memory repository for soft-deleted tasks.

use super::poisoned;
use crate::task::{
    domain::{DeletedTask, DeletedTaskId},
    ports::{DeletedTaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory deleted task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeletedTaskRepository {
    state: Arc<RwLock<InMemoryDeletedState>>,
}

#[derive(Debug, Default)]
struct InMemoryDeletedState {
    tasks: HashMap<DeletedTaskId, DeletedTask>,
    order: Vec<DeletedTaskId>,
}

impl InMemoryDeletedTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeletedTaskRepository for InMemoryDeletedTaskRepository {
    async fn store(&self, task: &DeletedTask) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateDeletedTask(task.id()));
        }

        state.order.push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: DeletedTaskId) -> TaskRepositoryResult<Option<DeletedTask>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<DeletedTask>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect())
    }

    async fn remove(&self, id: DeletedTaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        if state.tasks.remove(&id).is_none() {
            return Err(TaskRepositoryError::DeletedTaskNotFound(id));
        }
        state.order.retain(|stored_id| *stored_id != id);
        Ok(())
    }
}
