//! Principals, roles, and the authorization gate.
//!
//! The identity context that authenticates callers is an external
//! collaborator; this module only consumes its output shape (a [`Principal`]
//! carrying an id and a [`Role`]) and provides the pure [`authorize`] gate
//! that every role-restricted operation passes through before touching any
//! state.

mod gate;
mod principal;

pub use gate::{AccessDenied, authorize};
pub use principal::{ParseRoleError, Principal, Role};
