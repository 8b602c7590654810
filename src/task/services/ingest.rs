//! All-or-nothing bulk creation of tasks from tabular imports.

use crate::task::{
    domain::{CarrierDetails, Task},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::{UserId, UserRepository, UserRepositoryError};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Outcome of a bulk ingestion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    /// Number of tasks created.
    pub inserted: usize,
}

/// Errors returned by the bulk-ingestion pipeline.
#[derive(Debug, Error)]
pub enum BulkIngestError {
    /// The uploaded file carries no bytes.
    #[error("the uploaded file is empty")]
    EmptyFile,

    /// The referenced sale agent does not exist.
    #[error("sale agent {0} does not exist")]
    UnknownAgent(UserId),

    /// The tabular data could not be parsed.
    #[error("unparseable tabular data: {0}")]
    Malformed(String),

    /// Parsing succeeded but yielded zero data rows.
    #[error("the uploaded file contains no data rows")]
    EmptyDataset,

    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
}

/// Result type for bulk ingestion operations.
pub type BulkIngestResult<T> = Result<T, BulkIngestError>;

/// One parsed data row, mapped onto carrier fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CandidateRow {
    mc_number: String,
    company_name: String,
    address: String,
    email: String,
    phone: String,
}

impl CandidateRow {
    fn into_carrier_details(self) -> CarrierDetails {
        CarrierDetails {
            mc_number: self.mc_number,
            company_name: self.company_name,
            address: self.address,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Bulk-ingestion pipeline service.
///
/// Parses a CSV buffer into candidate rows, stamps each with the owning
/// agent and initial `assigned` status, and inserts the whole batch
/// atomically. Every row is buffered and validated before the first write.
#[derive(Clone)]
pub struct BulkIngestService<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<R, U, C> BulkIngestService<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new bulk-ingestion service.
    #[must_use]
    pub const fn new(repository: Arc<R>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            repository,
            users,
            clock,
        }
    }

    /// Creates one `assigned` task per data row, all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BulkIngestError::UnknownAgent`] when the agent does not
    /// resolve, [`BulkIngestError::EmptyFile`] for an empty buffer,
    /// [`BulkIngestError::Malformed`] when any row fails to parse (nothing
    /// is inserted), and [`BulkIngestError::EmptyDataset`] when parsing
    /// yields zero data rows.
    pub async fn create_many(
        &self,
        agent: UserId,
        buffer: &[u8],
    ) -> BulkIngestResult<IngestReport> {
        let agent_record = self
            .users
            .find_by_id(agent)
            .await?
            .ok_or(BulkIngestError::UnknownAgent(agent))?;

        if buffer.is_empty() {
            return Err(BulkIngestError::EmptyFile);
        }

        let candidates = parse_candidates(buffer)?;
        if candidates.is_empty() {
            return Err(BulkIngestError::EmptyDataset);
        }
        tracing::debug!(rows = candidates.len(), agent = %agent, "parsed bulk import rows");

        let tasks: Vec<Task> = candidates
            .into_iter()
            .map(|row| {
                Task::new_assigned(row.into_carrier_details(), agent_record.id(), &*self.clock)
            })
            .collect();

        let inserted = self.repository.insert_many(&tasks).await?;
        Ok(IngestReport { inserted })
    }
}

/// Parses the buffer into candidate rows using tolerant header mapping.
///
/// Header names are normalized (trimmed, lowercased, separators stripped)
/// so `MC Number`, `mcNumber`, and `mc_number` all map to the same field.
/// Unrecognized headers are ignored; a missing expected header yields an
/// empty field value rather than rejecting the row.
fn parse_candidates(buffer: &[u8]) -> BulkIngestResult<Vec<CandidateRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(buffer);

    let headers = reader
        .headers()
        .map_err(|err| BulkIngestError::Malformed(err.to_string()))?
        .clone();

    let mut header_map: HashMap<String, usize> = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        header_map.insert(normalize_header(header), idx);
    }

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .map_err(|err| BulkIngestError::Malformed(err.to_string()))?;

    let field = |record: &csv::StringRecord, name: &str| -> String {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(str::trim)
            .unwrap_or_default()
            .to_owned()
    };

    Ok(records
        .iter()
        .map(|record| CandidateRow {
            mc_number: field(record, "mcnumber"),
            company_name: field(record, "companyname"),
            address: field(record, "address"),
            email: field(record, "email"),
            phone: field(record, "phone"),
        })
        .collect())
}

/// Normalizes a header name for variant-tolerant matching.
fn normalize_header(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect()
}
