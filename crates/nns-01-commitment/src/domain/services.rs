//! # Domain Services
//!
//! Commitment hashing. Pure functions: no side effects, no stored state,
//! safe to call repeatedly and in parallel.

use crate::domain::abi::encode_commitment_input;
use crate::domain::errors::CommitmentError;
use crate::domain::secret::Secret;
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash, U256};

/// Computes Keccak-256 hash.
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    let digest = Keccak256::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest);
    Hash::new(bytes)
}

/// Computes a bid commitment.
///
/// `keccak256(abi.encode(name, bid_amount, secret, bidder))`, bit-exact with
/// the auction engine's own `makeCommitment`.
#[must_use]
pub fn make_commitment(name: &str, bid_amount: U256, secret: &Secret, bidder: Address) -> Hash {
    keccak256(&encode_commitment_input(
        name,
        bid_amount,
        secret.as_bytes(),
        bidder,
    ))
}

/// Recomputes a commitment and compares it with `expected`.
pub fn verify_commitment(
    name: &str,
    bid_amount: U256,
    secret: &Secret,
    bidder: Address,
    expected: &Hash,
) -> Result<(), CommitmentError> {
    let computed = make_commitment(name, bid_amount, secret, bidder);
    if computed != *expected {
        tracing::error!(
            name,
            expected = %expected,
            computed = %computed,
            "commitment does not match its plaintext fields"
        );
        return Err(CommitmentError::EncodingMismatch {
            expected: *expected,
            computed,
        });
    }
    Ok(())
}
