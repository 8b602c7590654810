//! Pure role-check gate applied before every restricted operation.

use super::{Principal, Role};
use thiserror::Error;

/// Role check failure.
///
/// Raised before any state mutation or restricted read is attempted; callers
/// must surface it as an access-control failure, never swallow it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("role {role} is not permitted for this operation")]
pub struct AccessDenied {
    /// Role carried by the rejected principal.
    pub role: Role,
    /// Roles the operation declared as permitted.
    pub required: Vec<Role>,
}

/// Checks a principal against an operation's declared role set.
///
/// Pure and deterministic; performs no I/O and consults no ambient state.
///
/// # Errors
///
/// Returns [`AccessDenied`] when the principal's role is not in
/// `allowed_roles`.
pub fn authorize(principal: &Principal, allowed_roles: &[Role]) -> Result<(), AccessDenied> {
    if allowed_roles.contains(&principal.role()) {
        return Ok(());
    }

    Err(AccessDenied {
        role: principal.role(),
        required: allowed_roles.to_vec(),
    })
}
