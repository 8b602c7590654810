//! User-facing error taxonomy for the operation facade.
//!
//! Every inner failure maps onto one stable [`ErrorKind`] signal for the
//! transport layer. Collaborator failure detail (store drivers, file
//! storage) is logged here and never echoed verbatim to the caller. The
//! core never retries; retries, if any, belong to the calling transport.

use crate::attachment::{AttachmentBindError, AttachmentRejection};
use crate::auth::AccessDenied;
use crate::task::domain::{TaskDomainError, TaskStatus};
use crate::task::services::{BulkIngestError, TaskLifecycleError};
use thiserror::Error;

/// Result type for facade operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Stable error signal exposed at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed payload or file content.
    InvalidInput,
    /// Malformed or unresolvable reference.
    InvalidReference,
    /// Unparseable tabular data.
    MalformedInput,
    /// Tabular data parsed to zero rows.
    EmptyDataset,
    /// Transition precondition violated.
    InvalidState,
    /// Identifier does not resolve to a record.
    NotFound,
    /// Attachment policy violation.
    AttachmentRejected,
    /// Role check failed.
    AccessDenied,
    /// A collaborator was unavailable or failed.
    DependencyFailure,
}

impl ErrorKind {
    /// Returns the canonical wire label for the signal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::InvalidReference => "invalid_reference",
            Self::MalformedInput => "malformed_input",
            Self::EmptyDataset => "empty_dataset",
            Self::InvalidState => "invalid_state",
            Self::NotFound => "not_found",
            Self::AttachmentRejected => "attachment_rejected",
            Self::AccessDenied => "access_denied",
            Self::DependencyFailure => "dependency_failure",
        }
    }
}

/// Facade-level error, one variant per taxonomy kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// Malformed payload or file content.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Malformed or unresolvable reference.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// Unparseable tabular data.
    #[error("the uploaded file could not be parsed as tabular data")]
    MalformedInput,

    /// Tabular data parsed to zero rows.
    #[error("the uploaded file contains no data rows")]
    EmptyDataset,

    /// Transition precondition violated.
    #[error("invalid task state: expected {expected}, found {actual}")]
    InvalidState {
        /// Status the transition requires.
        expected: TaskStatus,
        /// Status the task actually holds.
        actual: TaskStatus,
    },

    /// Identifier does not resolve to a record.
    #[error("task not found")]
    NotFound,

    /// Attachment policy violation.
    #[error("attachments rejected: {0}")]
    AttachmentRejected(AttachmentRejection),

    /// Role check failed.
    #[error(transparent)]
    AccessDenied(#[from] AccessDenied),

    /// A collaborator was unavailable or failed.
    #[error("a dependency is unavailable")]
    DependencyFailure,
}

impl DispatchError {
    /// Returns the stable signal for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::InvalidReference(_) => ErrorKind::InvalidReference,
            Self::MalformedInput => ErrorKind::MalformedInput,
            Self::EmptyDataset => ErrorKind::EmptyDataset,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
            Self::NotFound => ErrorKind::NotFound,
            Self::AttachmentRejected(_) => ErrorKind::AttachmentRejected,
            Self::AccessDenied(_) => ErrorKind::AccessDenied,
            Self::DependencyFailure => ErrorKind::DependencyFailure,
        }
    }
}

/// Logs collaborator failure detail and collapses it to the public signal.
fn dependency_failure(err: &dyn std::fmt::Display) -> DispatchError {
    tracing::error!(error = %err, "collaborator failure");
    DispatchError::DependencyFailure
}

impl From<TaskDomainError> for DispatchError {
    fn from(err: TaskDomainError) -> Self {
        match err {
            TaskDomainError::InvalidStatusTransition { from, to, .. } => Self::InvalidState {
                // The required prior state of a transition to `to` is
                // exactly the state it is reachable from.
                expected: match to {
                    TaskStatus::Assigned | TaskStatus::Submitted => TaskStatus::Assigned,
                    TaskStatus::Invoiced => TaskStatus::Submitted,
                },
                actual: from,
            },
            TaskDomainError::UnparseableDate { field, value } => {
                Self::InvalidInput(format!("unparseable {field} value: {value}"))
            }
        }
    }
}

impl From<TaskLifecycleError> for DispatchError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Domain(inner) => inner.into(),
            TaskLifecycleError::MalformedUserRef(inner) => Self::InvalidReference(inner.0),
            TaskLifecycleError::Repository(inner) => dependency_failure(&inner),
            TaskLifecycleError::Users(inner) => dependency_failure(&inner),
            TaskLifecycleError::Attachments(inner) => inner.into(),
            TaskLifecycleError::NotFound(_) => Self::NotFound,
            TaskLifecycleError::InvalidState {
                expected, actual, ..
            } => Self::InvalidState { expected, actual },
        }
    }
}

impl From<BulkIngestError> for DispatchError {
    fn from(err: BulkIngestError) -> Self {
        match err {
            BulkIngestError::EmptyFile => {
                Self::InvalidInput("the uploaded file is empty".to_owned())
            }
            BulkIngestError::UnknownAgent(agent) => Self::InvalidReference(agent.to_string()),
            BulkIngestError::Malformed(detail) => {
                tracing::warn!(detail, "rejected unparseable bulk import");
                Self::MalformedInput
            }
            BulkIngestError::EmptyDataset => Self::EmptyDataset,
            BulkIngestError::Repository(inner) => dependency_failure(&inner),
            BulkIngestError::Users(inner) => dependency_failure(&inner),
        }
    }
}

impl From<AttachmentBindError> for DispatchError {
    fn from(err: AttachmentBindError) -> Self {
        match err {
            AttachmentBindError::Rejected(rejection) => Self::AttachmentRejected(rejection),
            AttachmentBindError::Storage(inner) => dependency_failure(&inner),
        }
    }
}
