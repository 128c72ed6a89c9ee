//! # Domain Errors
//!
//! Error types for the Commitment Engine.

use shared_types::Hash;
use thiserror::Error;

/// Commitment engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    /// Recomputed commitment differs from the one submitted to the engine.
    ///
    /// Fatal for the affected bid: the engine will reject its reveal.
    #[error("Commitment encoding mismatch: expected {expected}, computed {computed}")]
    EncodingMismatch {
        /// Commitment previously submitted / stored
        expected: Hash,
        /// Commitment recomputed from the plaintext fields
        computed: Hash,
    },
}
