//! # Secret Generation
//!
//! Bid secrets come in two shapes: 32 random bytes, or a human-memorable text
//! that is hashed down to 32 bytes. Only the 32-byte value enters a commitment.
//!
//! ## Security
//!
//! All randomness is drawn from the operating system CSPRNG (`OsRng`).
//! Secret bytes are zeroed on drop and never printed by `Debug`.

use crate::domain::services::keccak256;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use shared_types::{Hash, HEX_MARKER};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed wordlist for memorable secrets.
pub const MEMORABLE_WORDS: [&str; 8] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "theta", "lambda",
];

/// Exclusive upper bound of the numeric suffix.
pub const MEMORABLE_SUFFIX_BOUND: u32 = 10_000;

/// A 32-byte bid secret that zeroizes on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Secret {
    inner: [u8; 32],
}

impl Secret {
    /// Wraps raw secret bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self { inner: bytes }
    }

    /// Copies a 32-byte slice. Returns None on any other length.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        <[u8; 32]>::try_from(slice).ok().map(Self::new)
    }

    /// Parses `0x`-prefixed or bare hex.
    pub fn from_hex(input: &str) -> Option<Self> {
        let digits = input.strip_prefix(HEX_MARKER).unwrap_or(input);
        let mut inner = [0u8; 32];
        hex::decode_to_slice(digits, &mut inner).ok()?;
        Some(Self { inner })
    }

    /// Borrow the secret bytes. Use immediately and let go.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.inner
    }

    /// Hex form handed to the engine at reveal time.
    pub fn to_hex(&self) -> String {
        format!("{HEX_MARKER}{}", hex::encode(self.inner))
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl From<Hash> for Secret {
    fn from(hash: Hash) -> Self {
        Self::new(hash.0)
    }
}

impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).ok_or_else(|| serde::de::Error::custom("invalid secret: expected 32 hex bytes"))
    }
}

/// Generate a cryptographically secure random secret.
pub fn random_secret() -> Secret {
    random_secret_with_rng(&mut OsRng)
}

/// Same as [`random_secret`] with a caller-supplied CSPRNG.
pub fn random_secret_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Secret {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    let secret = Secret::new(bytes);
    bytes.zeroize();
    secret
}

/// Generate a memorable secret text such as `"alpha-beta-4821"`.
///
/// Offers no entropy guarantee beyond roughly 19 bits; it exists for human
/// recall only.
pub fn random_memorable_text() -> String {
    random_memorable_text_with_rng(&mut OsRng)
}

/// Same as [`random_memorable_text`] with a caller-supplied CSPRNG.
pub fn random_memorable_text_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    let first = MEMORABLE_WORDS.choose(rng).copied().unwrap_or(MEMORABLE_WORDS[0]);
    let second = MEMORABLE_WORDS.choose(rng).copied().unwrap_or(MEMORABLE_WORDS[0]);
    let suffix = rng.gen_range(0..MEMORABLE_SUFFIX_BOUND);
    format!("{first}-{second}-{suffix}")
}

/// Hash secret text to the 32-byte value used in commitments.
///
/// keccak256 over the UTF-8 bytes of `text`.
pub fn derive_secret_bytes(text: &str) -> Secret {
    Secret::from(keccak256(text.as_bytes()))
}
