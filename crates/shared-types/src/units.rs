//! # Ether Units
//!
//! Conversion between decimal ether strings and wei (`U256`).

use crate::entities::U256;
use crate::errors::UnitsError;

/// Fractional digits in one ether.
pub const ETHER_DECIMALS: usize = 18;

/// Parses a decimal ether amount (`"1.5"`, `".25"`, `"3"`) into wei.
pub fn parse_ether(input: &str) -> Result<U256, UnitsError> {
    parse_units(input, ETHER_DECIMALS)
}

/// Parses a decimal amount with `decimals` fractional digits into base units.
pub fn parse_units(input: &str, decimals: usize) -> Result<U256, UnitsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(UnitsError::InvalidFormat(trimmed.to_string()));
    }
    if fraction.len() > decimals {
        return Err(UnitsError::TooManyDecimals {
            actual: fraction.len(),
            max: decimals,
        });
    }

    let mut digits = String::with_capacity(whole.len() + decimals);
    digits.push_str(whole);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat('0').take(decimals - fraction.len()));

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_dec_str(digits).map_err(|_| UnitsError::Overflow)
}

/// Renders wei as a decimal ether string, trailing zeros trimmed.
#[must_use]
pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}

/// Renders base units as a decimal string with `decimals` fractional digits.
#[must_use]
pub fn format_units(value: U256, decimals: usize) -> String {
    let divisor = U256::exp10(decimals);
    let whole = value / divisor;
    let fraction = value % divisor;
    if fraction.is_zero() {
        return whole.to_string();
    }
    let fraction = format!("{:0>width$}", fraction.to_string(), width = decimals);
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}
