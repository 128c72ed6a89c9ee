//! Recipient classification.
//!
//! Free-form destination strings are sorted into an address, a registered
//! name, or neither. Names are checked first, so a string ending in the name
//! suffix is a name even if it also looks like hex.

use crate::domain::names::NAME_SUFFIX;
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::fmt;

/// A classified destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RecipientReference {
    /// 20-byte address, normalized.
    Address(Address),
    /// Name to be resolved, as entered (trimmed).
    Name(String),
    /// Neither; the trimmed input is kept for error messages.
    Unknown(String),
}

impl RecipientReference {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for RecipientReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(addr) => write!(f, "address {addr}"),
            Self::Name(name) => write!(f, "name {name}"),
            Self::Unknown(input) => write!(f, "unknown '{input}'"),
        }
    }
}

/// Classify `input`. Total: every string maps to some reference.
pub fn classify(input: &str) -> RecipientReference {
    let trimmed = input.trim();

    if trimmed.to_lowercase().ends_with(NAME_SUFFIX) {
        return RecipientReference::Name(trimmed.to_string());
    }

    // Exactly 40 hex digits, with or without a lowercase `0x`.
    match trimmed.parse::<Address>() {
        Ok(addr) => RecipientReference::Address(addr),
        Err(_) => RecipientReference::Unknown(trimmed.to_string()),
    }
}
