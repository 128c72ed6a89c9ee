//! # Adapters
//!
//! Implementations of the outbound ports.
//!
//! - `storage`: in-memory and file-backed `KeyValueStore`s
//! - `serializer`: JSON `LedgerSerializer`

pub mod serializer;
pub mod storage;

pub use serializer::JsonLedgerSerializer;
pub use storage::{FileBackedKVStore, InMemoryKVStore};
