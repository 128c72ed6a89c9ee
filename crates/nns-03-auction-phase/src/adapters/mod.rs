//! # Adapters

mod memory;

pub use memory::InMemorySnapshotSource;
