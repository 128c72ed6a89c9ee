//! # Ledger Entities
//!
//! `BidRecord` is immutable once stored; the ledger only ever appends or
//! deletes whole records.

use nns_01_commitment::{verify_commitment, CommitmentError, PreparedBid, Secret};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash, Timestamp, U256};

/// Milliseconds since epoch, strictly increasing across a ledger.
pub type CreatedAt = u64;

/// A single committed bid and everything needed to reveal it later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidRecord {
    /// Auction (name) the bid was placed on.
    pub auction_id: String,
    /// Bid amount in wei.
    pub bid_amount: U256,
    /// Human-readable secret; empty when raw bytes were used.
    pub secret_text: String,
    /// 32-byte secret that entered the commitment.
    pub secret_bytes: Secret,
    /// Commitment submitted to the engine.
    pub commitment: Hash,
    /// Insertion stamp.
    pub created_at: CreatedAt,
}

/// Plaintext fields resubmitted to the engine at reveal time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealArgs {
    /// Name the bid was committed for.
    pub name: String,
    /// Committed amount, in wei.
    pub bid_amount: U256,
    /// Secret bytes that entered the commitment.
    pub secret: Secret,
}

impl BidRecord {
    /// Seals a prepared bid into a ledger record.
    pub fn from_prepared(bid: &PreparedBid, created_at: CreatedAt) -> Self {
        Self {
            auction_id: bid.name.clone(),
            bid_amount: bid.bid_amount,
            secret_text: bid.secret_text.clone(),
            secret_bytes: bid.secret.clone(),
            commitment: bid.commitment,
            created_at,
        }
    }

    /// Fields to pass to the engine's reveal call.
    pub fn reveal_args(&self) -> RevealArgs {
        RevealArgs {
            name: self.auction_id.clone(),
            bid_amount: self.bid_amount,
            secret: self.secret_bytes.clone(),
        }
    }

    /// Recomputes the commitment for `bidder` and checks it against the stored one.
    ///
    /// Run before revealing: a mismatch means the engine will reject the reveal.
    pub fn verify(&self, bidder: Address) -> Result<(), CommitmentError> {
        verify_commitment(
            &self.auction_id,
            self.bid_amount,
            &self.secret_bytes,
            bidder,
            &self.commitment,
        )
    }
}

/// An unrevealed commitment as reported by the auction engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnChainCommitment {
    /// Commitment hash.
    pub commitment: Hash,
    /// Value locked alongside the commitment, in wei.
    pub locked_value: U256,
    /// Engine timestamp of the commit.
    pub committed_at: Timestamp,
}

/// Engine commitment joined with the local record that produced it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledCommitment {
    /// Commitment hash, as the engine reports it.
    pub commitment: Hash,
    /// Value the engine holds for this commitment, in wei.
    pub locked_value: U256,
    /// Engine timestamp of the commit.
    pub committed_at: Timestamp,
    /// `None` when this installation never recorded the bid.
    pub local: Option<BidRecord>,
}

impl ReconciledCommitment {
    /// Auction name if known locally.
    pub fn auction_id(&self) -> Option<&str> {
        self.local.as_ref().map(|r| r.auction_id.as_str())
    }

    /// True when the bid can be revealed from this installation.
    pub fn is_revealable(&self) -> bool {
        self.local.is_some()
    }
}
