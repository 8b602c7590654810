//! Adapter implementations of the task repository port.

pub mod memory;
