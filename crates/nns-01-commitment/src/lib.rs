//! # NNS-01 Commitment Engine
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Produces bid secrets and the commitments that bind a bidder to a bid
//! without revealing it. The commitment must match the auction engine's own
//! computation bit for bit, otherwise the bid can never be revealed.
//!
//! ## Commitment
//!
//! ```text
//! commitment = keccak256(abi.encode(string name, uint256 bidAmount, bytes32 secret, address bidder))
//! ```
//!
//! ## Components
//!
//! | Component | Location | Purpose |
//! |-----------|----------|---------|
//! | Secret generator | `domain/secret.rs` | CSPRNG secrets, memorable texts, text hashing |
//! | ABI encoder | `domain/abi.rs` | Versioned head/tail encoding |
//! | Commitment | `domain/services.rs` | `make_commitment`, `verify_commitment` |
//! | Preparation | `domain/preparation.rs` | One-call bid builder |
//!
//! ## Usage Example
//!
//! ```ignore
//! use nns_01_commitment::prelude::*;
//!
//! let bid = BidPreparation::new("alice.ntu", parse_ether("0.5")?, bidder).prepare();
//! submit_to_engine(bid.commitment);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

pub use domain::{
    derive_secret_bytes, encode_commitment_input, keccak256, make_commitment,
    random_memorable_text, random_secret, verify_commitment, BidPreparation, CommitmentError,
    PreparedBid, Secret, COMMITMENT_ENCODING_VERSION,
};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::abi::{encode, encode_commitment_input, AbiValue, WORD};
    pub use crate::domain::errors::CommitmentError;
    pub use crate::domain::preparation::{BidPreparation, PreparedBid};
    pub use crate::domain::secret::{
        derive_secret_bytes, random_memorable_text, random_secret, Secret, MEMORABLE_WORDS,
    };
    pub use crate::domain::services::{keccak256, make_commitment, verify_commitment};
    pub use shared_types::{parse_ether, Address, Hash, U256};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 1;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Commitment Engine";
