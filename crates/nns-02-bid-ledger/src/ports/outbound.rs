//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the Bid Ledger service.

use crate::domain::entities::BidRecord;
use crate::domain::errors::{KVStoreError, SerializationError};

pub use shared_types::TimeSource;

/// Abstract interface for a scoped key-value store.
///
/// Production: `FileBackedKVStore` (survives restarts)
/// Testing: `InMemoryKVStore`
///
/// The ledger keeps its whole document under one key, so a single `put`
/// is the atomic unit of every ledger mutation.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Put a single key-value pair, replacing any previous value.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Abstract interface for encoding the ledger document.
pub trait LedgerSerializer: Send + Sync {
    /// Serialize all records.
    fn serialize(&self, records: &[BidRecord]) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize all records.
    fn deserialize(&self, data: &[u8]) -> Result<Vec<BidRecord>, SerializationError>;
}
