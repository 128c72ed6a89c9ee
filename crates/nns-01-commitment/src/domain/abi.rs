//! # Contract ABI Encoding
//!
//! Head/tail encoding compatible with Solidity's `abi.encode`, restricted to
//! the four value types a bid commitment needs.
//!
//! ## Layout
//!
//! ```text
//! head:  one 32-byte word per value
//!        static value  -> the value itself
//!        dynamic value -> byte offset of its tail, from the start of the head
//! tail:  dynamic values in order, each as [len word][bytes, zero-padded to 32]
//! ```
//!
//! Changing the order or width of any commitment field is a breaking change:
//! bump [`COMMITMENT_ENCODING_VERSION`] and every stored bid becomes unrevealable
//! against an engine that still uses the old layout.

use shared_types::{Address, U256};

/// ABI word size in bytes.
pub const WORD: usize = 32;

/// Version of the commitment input layout `(string, uint256, bytes32, address)`.
pub const COMMITMENT_ENCODING_VERSION: u8 = 1;

/// A single ABI-encodable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiValue<'a> {
    /// `string` - dynamic, UTF-8 bytes.
    String(&'a str),
    /// `uint256` - big-endian.
    Uint256(U256),
    /// `bytes32` - as-is.
    Bytes32(&'a [u8; 32]),
    /// `address` - right-aligned in its word.
    Address(Address),
}

impl AbiValue<'_> {
    /// Dynamic values are referenced by offset from the head.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, AbiValue::String(_))
    }
}

/// Encodes a `uint256` word.
#[must_use]
pub fn encode_uint256(value: U256) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    value.to_big_endian(&mut word);
    word
}

/// Encodes a `bytes32` word.
#[must_use]
pub fn encode_bytes32(value: &[u8; 32]) -> [u8; WORD] {
    *value
}

/// Encodes an `address` word (12 zero bytes, then the 20 address bytes).
#[must_use]
pub fn encode_address(address: Address) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - 20..].copy_from_slice(address.as_bytes());
    word
}

/// Encodes the tail of a `string`: length word, then the bytes padded to a
/// word boundary.
#[must_use]
pub fn encode_string_tail(value: &str) -> Vec<u8> {
    let bytes = value.as_bytes();
    let padded_len = bytes.len().div_ceil(WORD) * WORD;

    let mut tail = Vec::with_capacity(WORD + padded_len);
    tail.extend_from_slice(&encode_uint256(U256::from(bytes.len() as u64)));
    tail.extend_from_slice(bytes);
    tail.resize(WORD + padded_len, 0);
    tail
}

/// Encodes `values` the way `abi.encode(values...)` does.
#[must_use]
pub fn encode(values: &[AbiValue<'_>]) -> Vec<u8> {
    let head_len = values.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for value in values {
        match value {
            AbiValue::String(s) => {
                head.extend_from_slice(&encode_uint256(U256::from((head_len + tail.len()) as u64)));
                tail.extend_from_slice(&encode_string_tail(s));
            }
            AbiValue::Uint256(v) => head.extend_from_slice(&encode_uint256(*v)),
            AbiValue::Bytes32(b) => head.extend_from_slice(&encode_bytes32(b)),
            AbiValue::Address(a) => head.extend_from_slice(&encode_address(*a)),
        }
    }

    head.extend_from_slice(&tail);
    head
}

/// Encodes the commitment input `(name, bid_amount, secret, bidder)`.
#[must_use]
pub fn encode_commitment_input(
    name: &str,
    bid_amount: U256,
    secret: &[u8; 32],
    bidder: Address,
) -> Vec<u8> {
    encode(&[
        AbiValue::String(name),
        AbiValue::Uint256(bid_amount),
        AbiValue::Bytes32(secret),
        AbiValue::Address(bidder),
    ])
}
