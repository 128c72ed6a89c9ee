//! # NNS-02 Bid Ledger
//!
//! **Subsystem ID:** 2
//!
//! Durable local record of committed bids. The auction engine only ever sees
//! commitments; the plaintext (amount, secret) needed to reveal lives here
//! and nowhere else. Losing a record means the bid can never be revealed.
//!
//! ## Behaviour
//!
//! | Operation | Result |
//! |-----------|--------|
//! | `store` | Appends. Never overwrites, never deduplicates |
//! | `list_for` | Records for one auction, insertion order |
//! | `highest_for` | Greatest amount; earliest record wins ties |
//! | `remove` | Drops every record with the commitment, across auctions |
//! | `clear` | Drops everything under the scope key |
//!
//! Reads never fail. A document that cannot be decoded is logged and read
//! as an empty ledger; `BidLedger::load_records` reports it as
//! `LedgerError::Corrupt` for callers that care.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Entities, pure queries, errors, configuration
//! - `ports/` - `BidLedgerApi` (inbound), `KeyValueStore` / `LedgerSerializer` (outbound)
//! - `adapters/` - In-memory and file-backed stores, JSON serializer
//! - `service/` - `BidLedger` wiring it together
//!
//! ## Usage
//!
//! ```ignore
//! use nns_02_bid_ledger::{BidLedgerApi, FileBidLedger, BidRecord, LedgerConfig};
//!
//! let mut ledger = FileBidLedger::file_backed(LedgerConfig::from_env());
//! let stamp = ledger.next_created_at();
//! ledger.store(BidRecord::from_prepared(&bid, stamp))?;
//! let best = ledger.highest_for("alice.ntu");
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(test)]
mod test_utils;

pub use adapters::{FileBackedKVStore, InMemoryKVStore, JsonLedgerSerializer};
pub use domain::config::{LedgerConfig, DEFAULT_SCOPE_KEY, DEFAULT_STORE_PATH};
pub use domain::entities::{
    BidRecord, CreatedAt, OnChainCommitment, ReconciledCommitment, RevealArgs,
};
pub use domain::errors::{KVStoreError, LedgerError, SerializationError};
pub use ports::inbound::BidLedgerApi;
pub use ports::outbound::{KeyValueStore, LedgerSerializer, TimeSource};
pub use service::{BidLedger, BidLedgerDependencies, FileBidLedger, InMemoryBidLedger};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 2;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Bid Ledger";

/// `subsystem` field on every event this crate logs.
pub const LOG_SUBSYSTEM: &str = "nns-02";
