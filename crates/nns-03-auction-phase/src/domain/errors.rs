//! Error types for the Auction Phase subsystem.

use thiserror::Error;

/// Errors raised when fetching engine state.
///
/// Resolving a phase never fails; only the read from the engine can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhaseError {
    /// The engine could not be reached or returned garbage.
    #[error("Auction engine unavailable: {message}")]
    EngineUnavailable { message: String },

    /// The engine has no registration data for the name.
    #[error("No registration data for '{name}'")]
    UnknownDomain { name: String },
}
