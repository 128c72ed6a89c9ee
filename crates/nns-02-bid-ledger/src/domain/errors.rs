//! # Domain Errors
//!
//! Error types for the Bid Ledger subsystem.
//!
//! Business conditions (no bids, unknown commitment) are not errors here:
//! they come back as empty results. Only the persistence boundary can fail.

use thiserror::Error;

/// Errors raised by the key-value store port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KVStoreError {
    /// Underlying I/O failed.
    #[error("Store I/O error: {message}")]
    IOError { message: String },

    /// Persisted bytes could not be parsed back into entries.
    #[error("Store file is malformed: {message}")]
    Malformed { message: String },
}

/// Errors raised while (de)serializing the ledger document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Serialization error: {message}")]
pub struct SerializationError {
    /// Decoder or encoder message.
    pub message: String,
}

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The persisted ledger exists but cannot be decoded.
    ///
    /// Collapsed to an empty ledger at the public read boundary.
    #[error("Ledger data is corrupt: {reason}")]
    Corrupt { reason: String },

    /// The store refused a read or write.
    #[error("Ledger store failure: {0}")]
    Store(#[from] KVStoreError),

    /// The ledger could not be encoded for writing.
    #[error("Ledger encoding failure: {0}")]
    Encoding(SerializationError),
}
