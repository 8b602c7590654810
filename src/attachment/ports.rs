//! File storage port for bound attachments.

use super::{AttachmentRef, RawFile};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for file store operations.
pub type FileStoreResult<T> = Result<T, FileStoreError>;

/// Physical attachment storage contract.
///
/// Implementations own the storage medium (directory, object store,
/// database blob table); callers only ever see opaque references.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persists a file under the given store-internal name.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError::Storage`] when the medium rejects the
    /// write.
    async fn store(&self, file: &RawFile, stored_name: &str) -> FileStoreResult<AttachmentRef>;

    /// Loads a previously stored file's content.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError::MissingFile`] when the reference does not
    /// resolve, or [`FileStoreError::Storage`] when the medium fails.
    async fn load(&self, reference: &AttachmentRef) -> FileStoreResult<Vec<u8>>;
}

/// Errors returned by file store implementations.
#[derive(Debug, Clone, Error)]
pub enum FileStoreError {
    /// No stored file matches the reference.
    #[error("no stored file for reference: {0}")]
    MissingFile(AttachmentRef),

    /// Storage-medium failure.
    #[error("file storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl FileStoreError {
    /// Wraps a storage-medium error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
