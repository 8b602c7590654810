//! Freightdesk: freight-dispatch workflow coordination core.
//!
//! This crate coordinates a multi-party freight-dispatch workflow: a project
//! divider bulk-assigns loads to sale agents from a CSV upload, agents fill
//! in operational details and attach documents, and a dispatcher reviews
//! submissions and finalizes them into invoices.
//!
//! # Architecture
//!
//! Freightdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, filesystem)
//!
//! # Modules
//!
//! - [`auth`]: Principals, roles, and the authorization gate
//! - [`user`]: Minimal user reference model consumed by the core
//! - [`task`]: Task lifecycle engine and bulk-ingestion pipeline
//! - [`attachment`]: Attachment policy, binding, and file storage
//! - [`api`]: Role-gated operation facade and error taxonomy

pub mod api;
pub mod attachment;
pub mod auth;
pub mod task;
pub mod user;
