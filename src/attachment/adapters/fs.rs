//! Capability-sandboxed directory file store.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::attachment::{AttachmentRef, FileStore, FileStoreError, FileStoreResult, RawFile};

/// File store backed by a single upload directory.
///
/// The directory handle is capability-based: once opened, the store can
/// only read and write inside that directory, never elsewhere on the
/// filesystem. References are the stored file names within the directory.
#[derive(Debug, Clone)]
pub struct DirFileStore {
    root: Arc<Dir>,
}

impl DirFileStore {
    /// Opens a store rooted at an existing upload directory.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError::Storage`] when the directory cannot be
    /// opened.
    pub fn open(path: &Utf8Path) -> FileStoreResult<Self> {
        let root = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(FileStoreError::storage)?;
        Ok(Self {
            root: Arc::new(root),
        })
    }
}

#[async_trait]
impl FileStore for DirFileStore {
    async fn store(&self, file: &RawFile, stored_name: &str) -> FileStoreResult<AttachmentRef> {
        self.root
            .write(stored_name, file.bytes())
            .map_err(FileStoreError::storage)?;
        Ok(AttachmentRef::new(stored_name))
    }

    async fn load(&self, reference: &AttachmentRef) -> FileStoreResult<Vec<u8>> {
        match self.root.read(reference.as_str()) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(FileStoreError::MissingFile(reference.clone()))
            }
            Err(err) => Err(FileStoreError::storage(err)),
        }
    }
}
