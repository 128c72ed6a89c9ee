//! # Domain Layer
//!
//! Phase resolution and registration lifecycle. Pure functions of a
//! snapshot and a timestamp; nothing here reads a clock.

pub mod errors;
pub mod phase;
pub mod registration;

pub use errors::PhaseError;
pub use phase::{resolve_phase, AuctionPhase, AuctionSnapshot, PhaseStatus};
pub use registration::{
    registration_status, DomainMeta, RegistrationStatus, EXPIRY_WARNING_SECS, GRACE_PERIOD_DAYS,
    GRACE_PERIOD_SECS,
};
