//! # Inbound Ports (Driving Ports)
//!
//! The primary API for the Bid Ledger subsystem.

use crate::domain::entities::{BidRecord, CreatedAt, OnChainCommitment, ReconciledCommitment};
use crate::domain::errors::LedgerError;
use shared_types::Hash;

/// Primary API for the Bid Ledger.
///
/// Reads never fail: a corrupt store reads as empty. Writes fail only when
/// the underlying store does.
pub trait BidLedgerApi {
    /// Append a record. Never overwrites, never deduplicates.
    fn store(&mut self, record: BidRecord) -> Result<(), LedgerError>;

    /// All records for an auction, insertion order.
    fn list_for(&self, auction_id: &str) -> Vec<BidRecord>;

    /// Highest bid for an auction; earliest record wins ties.
    fn highest_for(&self, auction_id: &str) -> Option<BidRecord>;

    /// Delete every record carrying `commitment`, across auctions.
    ///
    /// Returns the number of records removed (0 is a no-op, not an error).
    fn remove(&mut self, commitment: &Hash) -> Result<usize, LedgerError>;

    /// Delete all records.
    fn clear(&mut self) -> Result<(), LedgerError>;

    /// Every record, insertion order.
    fn all(&self) -> Vec<BidRecord>;

    /// Join engine-reported commitments with local records.
    fn reconcile(&self, onchain: &[OnChainCommitment]) -> Vec<ReconciledCommitment>;

    /// Stamp for the next record, strictly after every stored one.
    fn next_created_at(&self) -> CreatedAt;
}
