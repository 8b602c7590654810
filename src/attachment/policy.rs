//! Count, type, and size policy for submitted documents.

use super::RawFile;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extensions accepted for submitted documents.
const ALLOWED_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "pdf", "doc", "docx"];

/// Default maximum number of files per submission.
const DEFAULT_MAX_FILES: usize = 5;

/// Default per-file size ceiling (10 MiB).
const DEFAULT_MAX_FILE_BYTES: usize = 10 * 1024 * 1024;

/// Policy violation detected while checking a submission's documents.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentRejection {
    /// More files were supplied than the policy admits.
    #[error("too many files: {actual} supplied, at most {max} allowed")]
    TooManyFiles {
        /// Maximum the policy admits.
        max: usize,
        /// Number of files supplied.
        actual: usize,
    },

    /// The file name carries no allow-listed extension.
    #[error("only image and document files are allowed: {name}")]
    DisallowedExtension {
        /// Original name of the offending file.
        name: String,
    },

    /// The file exceeds the per-file size ceiling.
    #[error("file {name} exceeds the {limit_bytes} byte limit ({actual_bytes} bytes)")]
    FileTooLarge {
        /// Original name of the offending file.
        name: String,
        /// Size ceiling in bytes.
        limit_bytes: usize,
        /// Actual size in bytes.
        actual_bytes: usize,
    },
}

/// Count, type, and size limits applied to a whole submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentPolicy {
    max_files: usize,
    max_file_bytes: usize,
}

impl AttachmentPolicy {
    /// Creates a policy with explicit limits.
    #[must_use]
    pub const fn new(max_files: usize, max_file_bytes: usize) -> Self {
        Self {
            max_files,
            max_file_bytes,
        }
    }

    /// Returns the maximum number of files per submission.
    #[must_use]
    pub const fn max_files(&self) -> usize {
        self.max_files
    }

    /// Returns the per-file size ceiling in bytes.
    #[must_use]
    pub const fn max_file_bytes(&self) -> usize {
        self.max_file_bytes
    }

    /// Checks a whole document set against the policy.
    ///
    /// Runs before any file is persisted so a violation anywhere rejects
    /// the set with nothing stored.
    ///
    /// # Errors
    ///
    /// Returns the first [`AttachmentRejection`] encountered.
    pub fn check(&self, files: &[RawFile]) -> Result<(), AttachmentRejection> {
        if files.len() > self.max_files {
            return Err(AttachmentRejection::TooManyFiles {
                max: self.max_files,
                actual: files.len(),
            });
        }

        for file in files {
            let allowed = file
                .extension()
                .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));
            if !allowed {
                return Err(AttachmentRejection::DisallowedExtension {
                    name: file.name().to_owned(),
                });
            }

            if file.len() > self.max_file_bytes {
                return Err(AttachmentRejection::FileTooLarge {
                    name: file.name().to_owned(),
                    limit_bytes: self.max_file_bytes,
                    actual_bytes: file.len(),
                });
            }
        }

        Ok(())
    }
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILES, DEFAULT_MAX_FILE_BYTES)
    }
}
