//! # Error Types
//!
//! Defines error types shared across subsystems.

use thiserror::Error;

/// Errors raised while decoding fixed-width hex values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// Wrong number of hex digits (marker excluded).
    #[error("Invalid hex length: expected {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A character outside `[0-9a-fA-F]`.
    #[error("Invalid hex digit: {0}")]
    InvalidDigit(String),
}

/// Errors raised while converting decimal ether amounts to wei.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    /// Nothing to parse.
    #[error("Amount is empty")]
    Empty,

    /// Anything other than digits and a single decimal point.
    #[error("Invalid amount: {0}")]
    InvalidFormat(String),

    /// More fractional digits than the unit supports.
    #[error("Too many decimals: {actual} > {max}")]
    TooManyDecimals { actual: usize, max: usize },

    /// Value does not fit in 256 bits.
    #[error("Amount overflows 256 bits")]
    Overflow,
}
