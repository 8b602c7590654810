//! Role-gated operation facade.
//!
//! [`DispatchApi`] is the abstract operation surface the transport layer
//! calls into. Every operation takes an explicit [`Principal`] (no ambient
//! request state), declares its permitted role set, and runs the
//! authorization gate before anything else, including id parsing and
//! payload validation. String-typed identifiers from the transport are
//! parsed here; malformed ones surface as
//! [`ErrorKind::InvalidReference`](error::ErrorKind::InvalidReference).

pub mod error;

pub use error::{DispatchError, DispatchResult, ErrorKind};

use crate::attachment::{AttachmentBinder, AttachmentPolicy, FileStore, RawFile};
use crate::auth::{Principal, Role, authorize};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::TaskRepository,
    services::{
        BulkIngestService, FinalizeTaskRequest, IngestReport, SubmitTaskRequest,
        TaskLifecycleService, TaskWithAgent,
    },
};
use crate::user::{UserId, UserRepository};
use mockable::Clock;
use std::sync::Arc;

/// Roles permitted to bulk-create tasks.
pub const BULK_CREATE_ROLES: &[Role] = &[Role::ProjectDivider];

/// Roles permitted to list their own assigned tasks.
pub const TASKS_FOR_CALLER_ROLES: &[Role] = &[Role::SaleAgent];

/// Roles permitted to fetch a single task.
pub const TASK_ROLES: &[Role] = &[Role::SaleAgent, Role::Dispatcher];

/// Roles permitted to submit a task.
pub const SUBMIT_ROLES: &[Role] = &[Role::SaleAgent];

/// Roles permitted to list tasks by status.
pub const TASKS_BY_STATUS_ROLES: &[Role] = &[Role::Dispatcher];

/// Roles permitted to finalize a task.
pub const FINALIZE_ROLES: &[Role] = &[Role::Dispatcher];

/// Role-gated facade over the lifecycle engine and ingestion pipeline.
#[derive(Clone)]
pub struct DispatchApi<R, U, S, C>
where
    R: TaskRepository,
    U: UserRepository,
    S: FileStore,
    C: Clock + Send + Sync,
{
    lifecycle: TaskLifecycleService<R, U, S, C>,
    ingest: BulkIngestService<R, U, C>,
}

impl<R, U, S, C> DispatchApi<R, U, S, C>
where
    R: TaskRepository,
    U: UserRepository,
    S: FileStore,
    C: Clock + Send + Sync,
{
    /// Creates a facade with the default attachment policy.
    #[must_use]
    pub fn new(tasks: Arc<R>, users: Arc<U>, files: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_policy(tasks, users, files, clock, AttachmentPolicy::default())
    }

    /// Creates a facade with an explicit attachment policy.
    #[must_use]
    pub fn with_policy(
        tasks: Arc<R>,
        users: Arc<U>,
        files: Arc<S>,
        clock: Arc<C>,
        policy: AttachmentPolicy,
    ) -> Self {
        let binder = AttachmentBinder::with_policy(files, policy);
        Self {
            lifecycle: TaskLifecycleService::new(
                Arc::clone(&tasks),
                Arc::clone(&users),
                binder,
                Arc::clone(&clock),
            ),
            ingest: BulkIngestService::new(tasks, users, clock),
        }
    }

    /// Bulk-creates tasks for a sale agent from an uploaded CSV buffer.
    ///
    /// Restricted to the project divider role. A leading `:` on the agent
    /// id is stripped (an artefact of the original upload client).
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] per the taxonomy: `AccessDenied`,
    /// `InvalidReference` for a malformed or unknown agent, `InvalidInput`
    /// for an empty file, `MalformedInput` for unparseable rows, and
    /// `EmptyDataset` when no data rows remain.
    pub async fn bulk_create(
        &self,
        principal: &Principal,
        agent_id: &str,
        file: &[u8],
    ) -> DispatchResult<IngestReport> {
        authorize(principal, BULK_CREATE_ROLES)?;
        let agent = parse_user_ref(agent_id.strip_prefix(':').unwrap_or(agent_id))?;
        Ok(self.ingest.create_many(agent, file).await?)
    }

    /// Lists tasks assigned to the calling sale agent.
    ///
    /// The agent reference is resolved from the principal itself, scoping
    /// the read to the caller's own tasks.
    ///
    /// # Errors
    ///
    /// Returns `AccessDenied` for non-agents, `InvalidReference` when the
    /// principal id is malformed, and `DependencyFailure` when the store
    /// fails.
    pub async fn tasks_for_caller(&self, principal: &Principal) -> DispatchResult<Vec<Task>> {
        authorize(principal, TASKS_FOR_CALLER_ROLES)?;
        let agent = parse_user_ref(principal.id())?;
        Ok(self.lifecycle.list_by_agent(agent).await?)
    }

    /// Fetches a single task by identifier.
    ///
    /// # Errors
    ///
    /// Returns `AccessDenied`, `InvalidReference` for a malformed id,
    /// `NotFound` when the id does not resolve, and `DependencyFailure`
    /// when the store fails.
    pub async fn task(&self, principal: &Principal, task_id: &str) -> DispatchResult<Task> {
        authorize(principal, TASK_ROLES)?;
        let id = parse_task_ref(task_id)?;
        Ok(self.lifecycle.get_by_id(id).await?)
    }

    /// Submits an assigned task with operational details and documents.
    ///
    /// # Errors
    ///
    /// Returns `AccessDenied`, `InvalidReference` for malformed task or
    /// dispatcher references, `NotFound`, `InvalidState` when the task is
    /// not `assigned`, `InvalidInput` for an unparseable working date,
    /// `AttachmentRejected` for a policy violation, and
    /// `DependencyFailure` when a collaborator fails.
    pub async fn submit(
        &self,
        principal: &Principal,
        task_id: &str,
        request: SubmitTaskRequest,
        files: &[RawFile],
    ) -> DispatchResult<Task> {
        authorize(principal, SUBMIT_ROLES)?;
        let id = parse_task_ref(task_id)?;
        Ok(self.lifecycle.submit(id, request, files).await?)
    }

    /// Lists tasks holding the given status, joined with agent display
    /// projections.
    ///
    /// # Errors
    ///
    /// Returns `AccessDenied` for non-dispatchers and `DependencyFailure`
    /// when a store fails.
    pub async fn tasks_by_status(
        &self,
        principal: &Principal,
        status: TaskStatus,
    ) -> DispatchResult<Vec<TaskWithAgent>> {
        authorize(principal, TASKS_BY_STATUS_ROLES)?;
        Ok(self.lifecycle.list_by_status(status).await?)
    }

    /// Finalizes a submitted task with invoice details.
    ///
    /// # Errors
    ///
    /// Returns `AccessDenied`, `InvalidReference` for a malformed id,
    /// `NotFound`, `InvalidState` when the task is not `submitted`,
    /// `InvalidInput` for unparseable invoice dates, and
    /// `DependencyFailure` when the store fails.
    pub async fn finalize(
        &self,
        principal: &Principal,
        task_id: &str,
        request: FinalizeTaskRequest,
    ) -> DispatchResult<Task> {
        authorize(principal, FINALIZE_ROLES)?;
        let id = parse_task_ref(task_id)?;
        Ok(self.lifecycle.finalize(id, request).await?)
    }
}

fn parse_user_ref(raw: &str) -> DispatchResult<UserId> {
    UserId::parse(raw).map_err(|err| DispatchError::InvalidReference(err.0))
}

fn parse_task_ref(raw: &str) -> DispatchResult<TaskId> {
    TaskId::parse(raw).map_err(|err| DispatchError::InvalidReference(err.0))
}
