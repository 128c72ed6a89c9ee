//! # NNS-04 Recipient Classifier
//!
//! **Subsystem ID:** 4
//!
//! Sorts a free-form destination into an address or a `.ntu` name, and
//! carries the name rules the engine enforces at registration.
//!
//! | Input | Result |
//! |-------|--------|
//! | `alice.ntu`, `ALICE.NTU` | `Name` |
//! | `0x` + 40 hex digits | `Address` |
//! | 40 hex digits | `Address` (marker added) |
//! | anything else | `Unknown` |

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryNameResolver;
pub use domain::{
    base_name, classify, format_name, validate_name, NameError, NameRules, RecipientError,
    RecipientReference, NAME_SUFFIX,
};
pub use ports::outbound::NameResolver;
pub use service::{resolve_input, resolve_recipient};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 4;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Recipient Classifier";
