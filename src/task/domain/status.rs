//! Task lifecycle status machine.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
///
/// Derived state: clients never set it directly; only the guarded
/// transition operations on the task aggregate mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been assigned to a sale agent and awaits submission.
    Assigned,
    /// Task has been submitted to a dispatcher with documents attached.
    Submitted,
    /// Task has been finalized into an invoice.
    Invoiced,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Submitted => "submitted",
            Self::Invoiced => "invoiced",
        }
    }

    /// Returns whether transition to `target` is allowed.
    ///
    /// The lifecycle is strictly linear: no reversal, no skip, and no
    /// self-transition.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Assigned, Self::Submitted) | (Self::Submitted, Self::Invoiced)
        )
    }

    /// Returns whether this status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Invoiced)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "assigned" => Ok(Self::Assigned),
            "submitted" => Ok(Self::Submitted),
            "invoiced" => Ok(Self::Invoiced),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
