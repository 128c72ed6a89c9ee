//! # Mock Auction Engine
//!
//! In-process stand-in for the external auction engine. It checks reveals
//! with its own commitment encoder, written independently of
//! `nns_01_commitment`, so a drift in either encoder shows up as a
//! rejected reveal.

use std::collections::HashMap;
use std::sync::Arc;

use nns_02_bid_ledger::OnChainCommitment;
use nns_03_auction_phase::{
    resolve_phase, AuctionPhase, AuctionSnapshot, AuctionSnapshotSource, DomainMeta, PhaseError,
};
use nns_04_recipients::NameResolver;
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash, ManualTimeSource, TimeSource, Timestamp, U256};
use thiserror::Error;

/// Length of the commit window opened by the first commitment.
pub const COMMIT_DURATION: u64 = 3 * 24 * 60 * 60;

/// Length of the reveal window.
pub const REVEAL_DURATION: u64 = 2 * 24 * 60 * 60;

/// Registration term granted to the winner.
pub const REGISTRATION_TERM: u64 = 365 * 24 * 60 * 60;

/// Rejections the engine reports back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Action not allowed in phase {phase}")]
    WrongPhase { phase: AuctionPhase },

    #[error("No matching commitment for this reveal")]
    CommitmentMismatch,

    #[error("Revealed amount exceeds locked value")]
    InsufficientDeposit,

    #[error("Commitment already submitted")]
    DuplicateCommitment,
}

#[derive(Debug, Clone)]
struct PendingCommitment {
    bidder: Address,
    commitment: Hash,
    locked_value: U256,
    committed_at: Timestamp,
    revealed: bool,
}

#[derive(Debug, Clone)]
struct Auction {
    snapshot: AuctionSnapshot,
    commitments: Vec<PendingCommitment>,
    highest: Option<(Address, U256)>,
}

/// Engine state plus a clock the test controls.
pub struct MockAuctionEngine {
    clock: Arc<ManualTimeSource>,
    auctions: HashMap<String, Auction>,
    domains: HashMap<String, DomainMeta>,
}

/// `keccak256(abi.encode(string, uint256, bytes32, address))`, built word by word.
pub fn reference_commitment(name: &str, amount: U256, secret: &[u8; 32], bidder: &Address) -> Hash {
    fn word_u64(value: u64) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&value.to_be_bytes());
        word
    }

    let mut amount_word = [0u8; 32];
    amount.to_big_endian(&mut amount_word);

    let mut address_word = [0u8; 32];
    address_word[12..].copy_from_slice(bidder.as_bytes());

    let name_bytes = name.as_bytes();
    let padded_len = name_bytes.len().div_ceil(32) * 32;
    let mut tail = name_bytes.to_vec();
    tail.resize(padded_len, 0);

    let mut hasher = Keccak256::new();
    hasher.update(word_u64(4 * 32));
    hasher.update(amount_word);
    hasher.update(secret);
    hasher.update(address_word);
    hasher.update(word_u64(name_bytes.len() as u64));
    hasher.update(&tail);

    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    Hash::new(out)
}

impl MockAuctionEngine {
    pub fn new(clock: Arc<ManualTimeSource>) -> Self {
        Self {
            clock,
            auctions: HashMap::new(),
            domains: HashMap::new(),
        }
    }

    fn now(&self) -> Timestamp {
        self.clock.now()
    }

    fn phase(&self, name: &str) -> AuctionPhase {
        let snapshot = self
            .auctions
            .get(name)
            .map(|a| a.snapshot)
            .unwrap_or_else(AuctionSnapshot::not_started);
        resolve_phase(&snapshot, self.now()).phase
    }

    /// Submit a sealed bid, opening the auction if this is the first one.
    pub fn commit(
        &mut self,
        name: &str,
        bidder: Address,
        commitment: Hash,
        locked_value: U256,
    ) -> Result<(), EngineError> {
        let phase = self.phase(name);
        if !matches!(phase, AuctionPhase::NotStarted | AuctionPhase::Commit) {
            return Err(EngineError::WrongPhase { phase });
        }

        let now = self.now();
        let auction = self.auctions.entry(name.to_string()).or_insert_with(|| Auction {
            snapshot: AuctionSnapshot::open(
                now + COMMIT_DURATION,
                now + COMMIT_DURATION + REVEAL_DURATION,
            ),
            commitments: Vec::new(),
            highest: None,
        });

        if auction.commitments.iter().any(|c| c.commitment == commitment) {
            return Err(EngineError::DuplicateCommitment);
        }
        auction.commitments.push(PendingCommitment {
            bidder,
            commitment,
            locked_value,
            committed_at: now,
            revealed: false,
        });
        Ok(())
    }

    /// Disclose a bid. The engine recomputes the commitment for `bidder`.
    pub fn reveal(
        &mut self,
        name: &str,
        bidder: Address,
        amount: U256,
        secret: &[u8; 32],
    ) -> Result<(), EngineError> {
        let phase = self.phase(name);
        if phase != AuctionPhase::Reveal {
            return Err(EngineError::WrongPhase { phase });
        }

        let expected = reference_commitment(name, amount, secret, &bidder);
        let auction = self
            .auctions
            .get_mut(name)
            .ok_or(EngineError::CommitmentMismatch)?;
        let pending = auction
            .commitments
            .iter_mut()
            .find(|c| c.bidder == bidder && c.commitment == expected && !c.revealed)
            .ok_or(EngineError::CommitmentMismatch)?;

        if amount > pending.locked_value {
            return Err(EngineError::InsufficientDeposit);
        }
        pending.revealed = true;

        // Strictly greater: the first reveal of an equal amount keeps the lead.
        match auction.highest {
            Some((_, best)) if amount <= best => {}
            _ => auction.highest = Some((bidder, amount)),
        }
        Ok(())
    }

    /// Settle the auction and register the name to the highest revealer.
    pub fn finalize(&mut self, name: &str) -> Result<Option<Address>, EngineError> {
        let phase = self.phase(name);
        if phase != AuctionPhase::PendingFinalization {
            return Err(EngineError::WrongPhase { phase });
        }

        let now = self.now();
        let Some(auction) = self.auctions.get_mut(name) else {
            return Err(EngineError::WrongPhase { phase });
        };
        auction.snapshot = auction.snapshot.finalize();

        let winner = auction.highest;
        if let Some((registrant, amount)) = winner {
            self.domains.insert(
                name.to_string(),
                DomainMeta {
                    registered_at: now,
                    expires_at: now + REGISTRATION_TERM,
                    registrant,
                    last_bid_amount: amount,
                    active: true,
                },
            );
        }
        Ok(winner.map(|(addr, _)| addr))
    }

    /// Unrevealed commitments made by `bidder`, in commit order.
    pub fn unrevealed_for(&self, bidder: Address) -> Vec<OnChainCommitment> {
        let mut found: Vec<_> = self
            .auctions
            .values()
            .flat_map(|a| a.commitments.iter())
            .filter(|c| c.bidder == bidder && !c.revealed)
            .collect();
        found.sort_by_key(|c| c.committed_at);
        found
            .into_iter()
            .map(|c| OnChainCommitment {
                commitment: c.commitment,
                locked_value: c.locked_value,
                committed_at: c.committed_at,
            })
            .collect()
    }

    /// Current highest revealed bid.
    pub fn highest(&self, name: &str) -> Option<(Address, U256)> {
        self.auctions.get(name).and_then(|a| a.highest)
    }
}

impl AuctionSnapshotSource for MockAuctionEngine {
    fn snapshot(&self, name: &str) -> Result<AuctionSnapshot, PhaseError> {
        Ok(self
            .auctions
            .get(name)
            .map(|a| a.snapshot)
            .unwrap_or_else(AuctionSnapshot::not_started))
    }

    fn domain_meta(&self, name: &str) -> Result<DomainMeta, PhaseError> {
        self.domains
            .get(name)
            .cloned()
            .ok_or_else(|| PhaseError::UnknownDomain {
                name: name.to_string(),
            })
    }
}

impl NameResolver for MockAuctionEngine {
    fn resolve(&self, name: &str) -> Option<Address> {
        let meta = self.domains.get(name)?;
        (meta.active && self.now() <= meta.expires_at).then_some(meta.registrant)
    }
}
