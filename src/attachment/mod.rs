//! Attachment policy, binding, and file storage.
//!
//! Documents uploaded at submission pass through the [`AttachmentBinder`]:
//! the whole set is checked against [`AttachmentPolicy`] before a single
//! byte is written, then each file is persisted under a random
//! collision-resistant name through the [`FileStore`] port and the opaque
//! [`AttachmentRef`]s come back for the task to own. The physical medium is
//! an external collaborator behind the port; the crate ships an in-memory
//! store and a capability-sandboxed directory store.

pub mod adapters;
mod binder;
mod file;
mod policy;
mod ports;

pub use binder::{AttachmentBindError, AttachmentBinder};
pub use file::{AttachmentRef, RawFile};
pub use policy::{AttachmentPolicy, AttachmentRejection};
pub use ports::{FileStore, FileStoreError, FileStoreResult};
