//! Adapter implementations of the file store port.

pub mod fs;
pub mod memory;

pub use fs::DirFileStore;
pub use memory::InMemoryFileStore;
