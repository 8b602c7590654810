//! Binds uploaded files to opaque attachment references.

use super::{AttachmentPolicy, AttachmentRef, AttachmentRejection, FileStore, FileStoreError,
            RawFile};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Errors returned while binding a submission's documents.
#[derive(Debug, Clone, Error)]
pub enum AttachmentBindError {
    /// The document set violates the attachment policy.
    #[error(transparent)]
    Rejected(#[from] AttachmentRejection),

    /// The storage collaborator failed.
    #[error(transparent)]
    Storage(#[from] FileStoreError),
}

/// Associates uploaded files with a task submission.
///
/// The whole set is validated against the policy before the first write,
/// so a rejected submission stores nothing. Each accepted file is persisted
/// under a random collision-resistant name that preserves only the original
/// extension.
#[derive(Clone)]
pub struct AttachmentBinder<S>
where
    S: FileStore,
{
    store: Arc<S>,
    policy: AttachmentPolicy,
}

impl<S> AttachmentBinder<S>
where
    S: FileStore,
{
    /// Creates a binder with the default policy.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_policy(store, AttachmentPolicy::default())
    }

    /// Creates a binder with an explicit policy.
    #[must_use]
    pub const fn with_policy(store: Arc<S>, policy: AttachmentPolicy) -> Self {
        Self { store, policy }
    }

    /// Returns the policy the binder enforces.
    #[must_use]
    pub const fn policy(&self) -> &AttachmentPolicy {
        &self.policy
    }

    /// Validates and persists a submission's documents.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentBindError::Rejected`] when the set violates the
    /// policy (nothing is stored), or [`AttachmentBindError::Storage`] when
    /// the storage collaborator fails mid-set.
    pub async fn bind(&self, files: &[RawFile]) -> Result<Vec<AttachmentRef>, AttachmentBindError> {
        self.policy.check(files)?;

        let mut references = Vec::with_capacity(files.len());
        for file in files {
            let stored_name = stored_name_for(file);
            references.push(self.store.store(file, &stored_name).await?);
        }
        Ok(references)
    }
}

/// Generates a random stored name preserving only the original extension.
fn stored_name_for(file: &RawFile) -> String {
    let token = Uuid::new_v4().simple();
    match file.extension() {
        Some(ext) => format!("{token}.{ext}"),
        None => token.to_string(),
    }
}
