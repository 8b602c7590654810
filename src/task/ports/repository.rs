//! Repository port for task persistence and guarded lifecycle writes.

use crate::task::domain::{Task, TaskId, TaskStatus};
use crate::user::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Outcome of a guard-and-set update.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardedUpdate {
    /// The guard held and the write was applied; carries the stored task.
    Applied(Task),
    /// No task with the given id exists.
    Missing,
    /// The stored status did not match the expected prior status; carries
    /// the status actually found.
    StatusConflict(TaskStatus),
}

/// Task persistence contract.
///
/// The store is a document store with by-id lookup, filtered find, batch
/// insert, and an atomic conditional update. Everything the lifecycle
/// engine guarantees about concurrent transitions rests on
/// [`TaskRepository::update_if_status`] being a single atomic
/// guard-and-set.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a batch of new tasks, all-or-nothing.
    ///
    /// Implementations must validate the whole batch before writing any
    /// row; a failure leaves the store unchanged. Returns the number of
    /// tasks inserted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when any task id
    /// already exists (nothing is inserted).
    async fn insert_many(&self, tasks: &[Task]) -> TaskRepositoryResult<usize>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks owned by the given sale agent.
    async fn find_by_agent(&self, agent: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks holding the given status.
    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Replaces a stored task if and only if its status equals `expected`.
    ///
    /// The status check and the write happen as one atomic step, so of two
    /// racing transitions on the same task exactly one observes
    /// [`GuardedUpdate::Applied`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store itself
    /// fails; guard misses are reported through [`GuardedUpdate`], not as
    /// errors.
    async fn update_if_status(
        &self,
        expected: TaskStatus,
        task: &Task,
    ) -> TaskRepositoryResult<GuardedUpdate>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
