//! # Ledger Queries
//!
//! Pure functions over an in-memory snapshot of the ledger. The service loads
//! a fresh snapshot for every call, so none of these return live views.

use crate::domain::entities::{BidRecord, CreatedAt, OnChainCommitment, ReconciledCommitment};
use shared_types::Hash;

/// All records for `auction_id`, in insertion order.
pub fn records_for(records: &[BidRecord], auction_id: &str) -> Vec<BidRecord> {
    records
        .iter()
        .filter(|r| r.auction_id == auction_id)
        .cloned()
        .collect()
}

/// Record with the greatest bid amount for `auction_id`.
///
/// Tie-break: the earliest-inserted record wins. The reduction only replaces
/// the current best on a strictly greater amount, mirroring the engine.
pub fn highest_for(records: &[BidRecord], auction_id: &str) -> Option<BidRecord> {
    records
        .iter()
        .filter(|r| r.auction_id == auction_id)
        .fold(None, |best: Option<&BidRecord>, current| match best {
            Some(b) if current.bid_amount > b.bid_amount => Some(current),
            Some(b) => Some(b),
            None => Some(current),
        })
        .cloned()
}

/// Drops every record whose commitment equals `commitment`, across auctions.
///
/// Returns how many were removed.
pub fn remove_commitment(records: &mut Vec<BidRecord>, commitment: &Hash) -> usize {
    let before = records.len();
    records.retain(|r| r.commitment != *commitment);
    before - records.len()
}

/// Next strictly increasing insertion stamp.
pub fn next_created_at(records: &[BidRecord], now_millis: u64) -> CreatedAt {
    match records.iter().map(|r| r.created_at).max() {
        Some(last) if last >= now_millis => last.saturating_add(1),
        _ => now_millis,
    }
}

/// Joins engine-reported commitments with local records, in engine order.
pub fn reconcile(records: &[BidRecord], onchain: &[OnChainCommitment]) -> Vec<ReconciledCommitment> {
    onchain
        .iter()
        .map(|c| ReconciledCommitment {
            commitment: c.commitment,
            locked_value: c.locked_value,
            committed_at: c.committed_at,
            local: records.iter().find(|r| r.commitment == c.commitment).cloned(),
        })
        .collect()
}
