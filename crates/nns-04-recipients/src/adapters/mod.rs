//! # Adapters

mod memory;

pub use memory::InMemoryNameResolver;
