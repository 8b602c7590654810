//! Port contracts for the task lifecycle engine.

mod repository;

pub use repository::{GuardedUpdate, TaskRepository, TaskRepositoryError, TaskRepositoryResult};
