//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The requested status change is not a permitted transition.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// Task the transition was attempted on.
        task_id: TaskId,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status the transition targeted.
        to: TaskStatus,
    },

    /// A date-valued payload field could not be parsed.
    #[error("unparseable {field} value: {value}")]
    UnparseableDate {
        /// Payload field the value arrived in.
        field: &'static str,
        /// The rejected text.
        value: String,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task identifiers supplied as text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed task reference: {0}")]
pub struct ParseTaskIdError(pub String);
