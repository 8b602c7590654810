//! Domain model for the task lifecycle.
//!
//! The task domain models bulk assignment, agent submission with bound
//! documents, and dispatcher invoicing while keeping all infrastructure
//! concerns outside of the domain boundary.

mod dates;
mod error;
mod ids;
mod invoice;
mod status;
mod submission;
mod task;

pub use dates::parse_payload_date;
pub use error::{ParseTaskIdError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use invoice::Invoice;
pub use status::TaskStatus;
pub use submission::Submission;
pub use task::{CarrierDetails, PersistedTaskData, Task};
