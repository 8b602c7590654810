//! Submission details recorded when a sale agent hands a task to dispatch.

use crate::attachment::AttachmentRef;
use crate::user::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Operational details recorded once, at submission.
///
/// Present on a task only from `submitted` onwards. The dispatcher
/// reference is set here exactly once, and the bound attachment references
/// are immutable afterwards (resubmission is not supported).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Driver assigned to the load.
    pub driver_name: String,
    /// Truck type used for the load.
    pub truck_type: String,
    /// Date the load is worked.
    pub working_date: NaiveDate,
    /// Rate offered for the load.
    pub offer_rate: f64,
    /// Load weight.
    pub weight: f64,
    /// Agreed call time.
    pub call_time: String,
    /// Free-form agent comments.
    pub comments: String,
    /// Dispatcher the task is submitted to.
    pub dispatcher: UserId,
    /// Ordered references to the documents bound at submission.
    pub documents: Vec<AttachmentRef>,
}
