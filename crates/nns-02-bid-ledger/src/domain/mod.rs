//! # Domain Layer
//!
//! Pure ledger logic: entities, queries, errors and configuration.
//! No I/O here; persistence goes through `ports::outbound`.

pub mod config;
pub mod entities;
pub mod errors;
pub mod ledger;

pub use config::LedgerConfig;
pub use entities::{BidRecord, CreatedAt, OnChainCommitment, ReconciledCommitment, RevealArgs};
pub use errors::{KVStoreError, LedgerError, SerializationError};
