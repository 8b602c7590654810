//! Service layer for guarded task transitions and reads.

use crate::attachment::{AttachmentBindError, AttachmentBinder, FileStore, RawFile};
use crate::task::{
    domain::{
        Invoice, Submission, Task, TaskDomainError, TaskId, TaskStatus, parse_payload_date,
    },
    ports::{GuardedUpdate, TaskRepository, TaskRepositoryError},
};
use crate::user::{
    ParseUserIdError, UserId, UserRepository, UserRepositoryError,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Payload a sale agent supplies when submitting a task.
///
/// Date fields arrive as text from the transport and are parsed before
/// storage; the dispatcher reference likewise arrives as opaque text.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTaskRequest {
    /// Driver assigned to the load.
    pub driver_name: String,
    /// Truck type used for the load.
    pub truck_type: String,
    /// Date the load is worked, as `YYYY-MM-DD` text.
    pub working_date: String,
    /// Rate offered for the load.
    pub offer_rate: f64,
    /// Load weight.
    pub weight: f64,
    /// Agreed call time.
    pub call_time: String,
    /// Free-form agent comments.
    pub comments: String,
    /// Dispatcher the task is submitted to, as opaque text.
    pub dispatcher_id: String,
}

/// Payload a dispatcher supplies when finalizing a task.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizeTaskRequest {
    /// Purchase-order number.
    pub po_number: String,
    /// Load detail description.
    pub load_detail: String,
    /// Pickup date, as `YYYY-MM-DD` text.
    pub pickup_date: String,
    /// Delivery date, as `YYYY-MM-DD` text.
    pub delivery_date: String,
    /// Agreed rate.
    pub rate: f64,
    /// Broker detail description.
    pub broker_detail: String,
    /// Load status label.
    pub load_status: String,
    /// Invoiced amount.
    pub invoice_amount: f64,
    /// Invoice date, as `YYYY-MM-DD` text.
    pub invoice_date: String,
}

/// Minimal display projection of a task's owning agent.
///
/// A denormalized read join produced for dispatcher-facing listings, not a
/// field of the task itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDisplay {
    /// Agent identifier.
    pub id: UserId,
    /// Agent display name.
    pub name: String,
}

/// Task joined with its agent display projection.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskWithAgent {
    /// The task record.
    pub task: Task,
    /// Display projection of the owning agent, when the user resolves.
    pub agent: Option<AgentDisplay>,
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// A user reference supplied as text is malformed.
    #[error(transparent)]
    MalformedUserRef(#[from] ParseUserIdError),

    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),

    /// Attachment binding failed.
    #[error(transparent)]
    Attachments(#[from] AttachmentBindError),

    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// The task is not in the status the transition requires.
    #[error("task {task_id} is {actual}, transition requires {expected}")]
    InvalidState {
        /// Task the transition was attempted on.
        task_id: TaskId,
        /// Status the transition requires.
        expected: TaskStatus,
        /// Status the task actually holds.
        actual: TaskStatus,
    },
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, U, S, C>
where
    R: TaskRepository,
    U: UserRepository,
    S: FileStore,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    users: Arc<U>,
    binder: AttachmentBinder<S>,
    clock: Arc<C>,
}

impl<R, U, S, C> TaskLifecycleService<R, U, S, C>
where
    R: TaskRepository,
    U: UserRepository,
    S: FileStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        users: Arc<U>,
        binder: AttachmentBinder<S>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            users,
            binder,
            clock,
        }
    }

    async fn find_task_or_error(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }

    fn ensure_status(task: &Task, expected: TaskStatus) -> TaskLifecycleResult<()> {
        if task.status() == expected {
            return Ok(());
        }
        Err(TaskLifecycleError::InvalidState {
            task_id: task.id(),
            expected,
            actual: task.status(),
        })
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the id, or
    /// repository errors when the lookup fails.
    pub async fn get_by_id(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.find_task_or_error(task_id).await
    }

    /// Returns all tasks owned by the given sale agent.
    ///
    /// The engine does not enforce "own tasks only"; the caller resolves
    /// the agent id from the authenticated principal.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_by_agent(&self, agent: UserId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_by_agent(agent).await?)
    }

    /// Returns all tasks holding the given status, each joined with a
    /// minimal display projection of its owning agent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] or
    /// [`TaskLifecycleError::Users`] when a lookup fails.
    pub async fn list_by_status(
        &self,
        status: TaskStatus,
    ) -> TaskLifecycleResult<Vec<TaskWithAgent>> {
        let tasks = self.repository.find_by_status(status).await?;

        let mut listings = Vec::with_capacity(tasks.len());
        for task in tasks {
            let agent = self
                .users
                .find_by_id(task.sale_agent())
                .await?
                .map(|user| AgentDisplay {
                    id: user.id(),
                    name: user.name().to_owned(),
                });
            listings.push(TaskWithAgent { task, agent });
        }
        Ok(listings)
    }

    /// Submits an assigned task with operational details and documents.
    ///
    /// The attachment policy is enforced before any state is touched, and
    /// the final write is a guard-and-set on `assigned`, so a concurrent
    /// submit observes [`TaskLifecycleError::InvalidState`] rather than
    /// silently overwriting.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the id does not
    /// resolve, [`TaskLifecycleError::InvalidState`] when the task is not
    /// `assigned`, [`TaskLifecycleError::MalformedUserRef`] for a malformed
    /// dispatcher reference, [`TaskLifecycleError::Domain`] for an
    /// unparseable working date, and [`TaskLifecycleError::Attachments`]
    /// when the document set is rejected or storage fails.
    pub async fn submit(
        &self,
        task_id: TaskId,
        request: SubmitTaskRequest,
        files: &[RawFile],
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find_task_or_error(task_id).await?;
        Self::ensure_status(&task, TaskStatus::Assigned)?;

        let dispatcher = UserId::parse(&request.dispatcher_id)?;
        let working_date = parse_payload_date("working_date", &request.working_date)?;

        let documents = self.binder.bind(files).await?;

        let submission = Submission {
            driver_name: request.driver_name,
            truck_type: request.truck_type,
            working_date,
            offer_rate: request.offer_rate,
            weight: request.weight,
            call_time: request.call_time,
            comments: request.comments,
            dispatcher,
            documents,
        };
        task.record_submission(submission, &*self.clock)?;

        self.apply_guarded(TaskStatus::Assigned, &task).await
    }

    /// Finalizes a submitted task with invoice details.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the id does not
    /// resolve, [`TaskLifecycleError::InvalidState`] when the task is not
    /// `submitted`, and [`TaskLifecycleError::Domain`] for unparseable
    /// invoice dates.
    pub async fn finalize(
        &self,
        task_id: TaskId,
        request: FinalizeTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find_task_or_error(task_id).await?;
        Self::ensure_status(&task, TaskStatus::Submitted)?;

        let invoice = Invoice {
            po_number: request.po_number,
            load_detail: request.load_detail,
            pickup_date: parse_payload_date("pickup_date", &request.pickup_date)?,
            delivery_date: parse_payload_date("delivery_date", &request.delivery_date)?,
            rate: request.rate,
            broker_detail: request.broker_detail,
            load_status: request.load_status,
            invoice_amount: request.invoice_amount,
            invoice_date: parse_payload_date("invoice_date", &request.invoice_date)?,
        };
        task.record_invoice(invoice, &*self.clock)?;

        self.apply_guarded(TaskStatus::Submitted, &task).await
    }

    async fn apply_guarded(
        &self,
        expected: TaskStatus,
        task: &Task,
    ) -> TaskLifecycleResult<Task> {
        match self.repository.update_if_status(expected, task).await? {
            GuardedUpdate::Applied(stored) => Ok(stored),
            GuardedUpdate::Missing => Err(TaskLifecycleError::NotFound(task.id())),
            GuardedUpdate::StatusConflict(actual) => Err(TaskLifecycleError::InvalidState {
                task_id: task.id(),
                expected,
                actual,
            }),
        }
    }
}
