//! Authenticated principal and workflow role types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Workflow role carried by an authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Organisation owner.
    Owner,
    /// Administrative user.
    Admin,
    /// Splits imported loads across sale agents.
    ProjectDivider,
    /// Works assigned loads and submits them for dispatch.
    SaleAgent,
    /// Reviews submissions and issues invoices.
    Dispatcher,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::ProjectDivider => "project_divider",
            Self::SaleAgent => "sale_agent",
            Self::Dispatcher => "dispatcher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "project_divider" => Ok(Self::ProjectDivider),
            "sale_agent" => Ok(Self::SaleAgent),
            "dispatcher" => Ok(Self::Dispatcher),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Error returned while parsing roles from persistence or transport.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Authenticated actor performing a call.
///
/// The identity context hands the core an already-authenticated id and role
/// per call; the id stays string-typed here because the transport supplies
/// it as opaque text, and it is parsed into a typed reference at the point
/// of use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    id: String,
    role: Role,
}

impl Principal {
    /// Creates a principal from identity-context output.
    #[must_use]
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    /// Returns the principal identifier as supplied by the identity context.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the principal's workflow role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}
