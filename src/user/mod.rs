//! Minimal user reference model.
//!
//! User lifecycle (registration, credential hashing, profile updates) is an
//! external collaborator concern. The core only needs users as reference
//! targets: the sale agent a task is assigned to, the dispatcher it is
//! submitted to, and the display name joined into dispatcher-facing task
//! listings.

pub mod adapters;
mod domain;
mod ports;

pub use domain::{ParseUserIdError, User, UserId};
pub use ports::{UserRepository, UserRepositoryError, UserRepositoryResult};
