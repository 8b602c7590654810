//! Task lifecycle management for freightdesk.
//!
//! This module owns the Task entity and its state machine: tasks are created
//! in bulk from tabular imports, submitted by sale agents with operational
//! details and bound documents, and finalized into invoices by dispatchers.
//! Status moves strictly along `assigned -> submitted -> invoiced`; only the
//! guarded transition operations mutate it, and the repository contract
//! makes each transition write a single atomic guard-and-set on the prior
//! status. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
