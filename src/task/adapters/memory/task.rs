//! In-memory task repository for tests and embedding hosts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{GuardedUpdate, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::UserId;

/// Thread-safe in-memory task repository.
///
/// A single write lock spans the guard check and the write in
/// `update_if_status`, giving the atomic conditional update the port
/// requires.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Returns matching tasks ordered by creation time, then id.
fn collect_sorted(state: &HashMap<TaskId, Task>, matches: impl Fn(&Task) -> bool) -> Vec<Task> {
    let mut found: Vec<Task> = state.values().filter(|task| matches(task)).cloned().collect();
    found.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().into_inner().cmp(&b.id().into_inner()))
    });
    found
}

fn poisoned(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert_many(&self, tasks: &[Task]) -> TaskRepositoryResult<usize> {
        let mut state = self.state.write().map_err(poisoned)?;

        // Validate the whole batch before touching the map, including
        // duplicates within the batch itself.
        let mut incoming = std::collections::HashSet::with_capacity(tasks.len());
        for task in tasks {
            if state.contains_key(&task.id()) || !incoming.insert(task.id()) {
                return Err(TaskRepositoryError::DuplicateTask(task.id()));
            }
        }

        for task in tasks {
            state.insert(task.id(), task.clone());
        }
        Ok(tasks.len())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(&id).cloned())
    }

    async fn find_by_agent(&self, agent: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(collect_sorted(&state, |task| task.sale_agent() == agent))
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(collect_sorted(&state, |task| task.status() == status))
    }

    async fn update_if_status(
        &self,
        expected: TaskStatus,
        task: &Task,
    ) -> TaskRepositoryResult<GuardedUpdate> {
        let mut state = self.state.write().map_err(poisoned)?;

        let Some(stored) = state.get(&task.id()) else {
            return Ok(GuardedUpdate::Missing);
        };
        if stored.status() != expected {
            return Ok(GuardedUpdate::StatusConflict(stored.status()));
        }

        state.insert(task.id(), task.clone());
        Ok(GuardedUpdate::Applied(task.clone()))
    }
}
