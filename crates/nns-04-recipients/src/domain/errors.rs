//! Error types for the Recipient subsystem.
//!
//! Classification itself never fails; `RecipientReference::Unknown` is a
//! normal outcome. These cover name validation and resolution.

use thiserror::Error;

/// Reasons a string is not a registrable name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Domain name cannot be empty")]
    Empty,

    #[error("Domain name is too short (minimum {min} characters)")]
    TooShort { min: usize },

    #[error("Domain name is too long (maximum {max} characters)")]
    TooLong { max: usize },

    #[error("Domain must end with {suffix}")]
    MissingSuffix { suffix: String },

    #[error("Domain name cannot be just {suffix}")]
    BareSuffix { suffix: String },
}

/// Failures turning a recipient reference into an address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipientError {
    /// The name has no registered owner.
    #[error("Name '{name}' does not resolve to an address")]
    NotFound { name: String },

    /// The input was neither an address nor a name.
    #[error("Invalid recipient '{input}': must be a name or an address")]
    Unclassifiable { input: String },
}
