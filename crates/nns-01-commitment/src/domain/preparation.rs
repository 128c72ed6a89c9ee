//! # Bid Preparation
//!
//! Builder that turns bid parameters into everything the caller must submit
//! now (the commitment) and keep for later (the plaintext reveal fields).

use crate::domain::secret::{derive_secret_bytes, random_memorable_text_with_rng, Secret};
use crate::domain::services::make_commitment;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use shared_types::{Address, Hash, U256};

/// Where the secret of a bid comes from.
#[derive(Debug, Clone)]
enum SecretSource {
    /// Generate a memorable text, then hash it.
    Generated,
    /// Hash a caller-chosen text.
    Text(String),
    /// Use 32 raw bytes directly; no text is kept.
    Raw(Secret),
}

/// A bid ready for submission: commitment plus the reveal material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedBid {
    /// Name being bid on.
    pub name: String,
    /// Bid amount in wei.
    pub bid_amount: U256,
    /// Bidder address bound into the commitment.
    pub bidder: Address,
    /// Human-readable secret, empty when raw bytes were supplied.
    pub secret_text: String,
    /// 32-byte secret that entered the commitment.
    pub secret: Secret,
    /// Commitment to submit to the engine.
    pub commitment: Hash,
}

/// Builder for [`PreparedBid`].
#[derive(Debug, Clone)]
pub struct BidPreparation {
    name: String,
    bid_amount: U256,
    bidder: Address,
    secret: SecretSource,
}

impl BidPreparation {
    /// Starts a bid; the secret defaults to a generated memorable text.
    pub fn new(name: impl Into<String>, bid_amount: U256, bidder: Address) -> Self {
        Self {
            name: name.into(),
            bid_amount,
            bidder,
            secret: SecretSource::Generated,
        }
    }

    /// Use a caller-chosen secret text.
    pub fn secret_text(mut self, text: impl Into<String>) -> Self {
        self.secret = SecretSource::Text(text.into());
        self
    }

    /// Use raw secret bytes (the stored text will be empty).
    pub fn raw_secret(mut self, secret: Secret) -> Self {
        self.secret = SecretSource::Raw(secret);
        self
    }

    /// Build the prepared bid using the OS CSPRNG.
    pub fn prepare(self) -> PreparedBid {
        self.prepare_with_rng(&mut OsRng)
    }

    /// Build the prepared bid with a caller-supplied CSPRNG.
    pub fn prepare_with_rng<R: RngCore + CryptoRng>(self, rng: &mut R) -> PreparedBid {
        let (secret_text, secret) = match self.secret {
            SecretSource::Generated => {
                let text = random_memorable_text_with_rng(rng);
                let secret = derive_secret_bytes(&text);
                (text, secret)
            }
            SecretSource::Text(text) => {
                let secret = derive_secret_bytes(&text);
                (text, secret)
            }
            SecretSource::Raw(secret) => (String::new(), secret),
        };

        let commitment = make_commitment(&self.name, self.bid_amount, &secret, self.bidder);
        tracing::debug!(
            name = %self.name,
            bid_amount = %self.bid_amount,
            commitment = %commitment,
            "prepared bid commitment"
        );

        PreparedBid {
            name: self.name,
            bid_amount: self.bid_amount,
            bidder: self.bidder,
            secret_text,
            secret,
            commitment,
        }
    }
}
