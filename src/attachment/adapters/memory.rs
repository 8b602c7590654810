//! In-memory file store for tests and embedding hosts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::attachment::{AttachmentRef, FileStore, FileStoreError, FileStoreResult, RawFile};

/// Thread-safe in-memory file store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileStore {
    state: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryFileStore {
    /// Creates an empty in-memory file store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored files.
    ///
    /// Test observability helper; returns zero when the lock is poisoned.
    #[must_use]
    pub fn stored_count(&self) -> usize {
        self.state.read().map(|state| state.len()).unwrap_or(0)
    }
}

#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn store(&self, file: &RawFile, stored_name: &str) -> FileStoreResult<AttachmentRef> {
        let mut state = self
            .state
            .write()
            .map_err(|err| FileStoreError::storage(std::io::Error::other(err.to_string())))?;
        state.insert(stored_name.to_owned(), file.bytes().to_vec());
        Ok(AttachmentRef::new(stored_name))
    }

    async fn load(&self, reference: &AttachmentRef) -> FileStoreResult<Vec<u8>> {
        let state = self
            .state
            .read()
            .map_err(|err| FileStoreError::storage(std::io::Error::other(err.to_string())))?;
        state
            .get(reference.as_str())
            .cloned()
            .ok_or_else(|| FileStoreError::MissingFile(reference.clone()))
    }
}
