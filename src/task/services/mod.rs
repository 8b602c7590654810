//! Orchestration services for the task lifecycle.

mod ingest;
mod lifecycle;

pub use ingest::{BulkIngestError, BulkIngestResult, BulkIngestService, IngestReport};
pub use lifecycle::{
    AgentDisplay, FinalizeTaskRequest, SubmitTaskRequest, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService, TaskWithAgent,
};
