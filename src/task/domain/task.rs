//! Task aggregate root.

use super::{Invoice, Submission, TaskDomainError, TaskId, TaskStatus};
use crate::user::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Carrier and contact fields captured at assignment.
///
/// These come from the bulk import (or a direct assignment) and never
/// change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierDetails {
    /// Carrier MC number.
    pub mc_number: String,
    /// Carrier company name.
    pub company_name: String,
    /// Company address.
    pub address: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
}

/// Task aggregate root.
///
/// The lifecycle engine exclusively owns state transitions: status and the
/// fields gated by a transition are only ever written through
/// [`Task::record_submission`] and [`Task::record_invoice`]; there is no
/// generic field-patch path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    carrier: CarrierDetails,
    sale_agent: UserId,
    submission: Option<Submission>,
    invoice: Option<Invoice>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted carrier details.
    pub carrier: CarrierDetails,
    /// Persisted owning sale agent.
    pub sale_agent: UserId,
    /// Persisted submission details, if any.
    pub submission: Option<Submission>,
    /// Persisted invoice details, if any.
    pub invoice: Option<Invoice>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a freshly assigned task owned by the given sale agent.
    #[must_use]
    pub fn new_assigned(carrier: CarrierDetails, sale_agent: UserId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            carrier,
            sale_agent,
            submission: None,
            invoice: None,
            status: TaskStatus::Assigned,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            carrier: data.carrier,
            sale_agent: data.sale_agent,
            submission: data.submission,
            invoice: data.invoice,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the carrier details captured at assignment.
    #[must_use]
    pub const fn carrier(&self) -> &CarrierDetails {
        &self.carrier
    }

    /// Returns the owning sale agent reference.
    #[must_use]
    pub const fn sale_agent(&self) -> UserId {
        self.sale_agent
    }

    /// Returns the submission details, if the task has been submitted.
    #[must_use]
    pub const fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Returns the invoice details, if the task has been invoiced.
    #[must_use]
    pub const fn invoice(&self) -> Option<&Invoice> {
        self.invoice.as_ref()
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Records the agent submission and moves the task to `submitted`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the task is
    /// not currently `assigned`.
    pub fn record_submission(
        &mut self,
        submission: Submission,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.transition_to(TaskStatus::Submitted)?;
        self.submission = Some(submission);
        self.touch(clock);
        Ok(())
    }

    /// Records the invoice and moves the task to `invoiced`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the task is
    /// not currently `submitted`.
    pub fn record_invoice(
        &mut self,
        invoice: Invoice,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.transition_to(TaskStatus::Invoiced)?;
        self.invoice = Some(invoice);
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }

    fn transition_to(&mut self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }

        self.status = target;
        Ok(())
    }
}
