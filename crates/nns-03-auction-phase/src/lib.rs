//! # NNS-03 Auction Phase Resolver
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Works out which engine action is valid for a name right now: commit,
//! reveal, finalize, or nothing. The phase is a pure function of an engine
//! snapshot and the current time.
//!
//! ## Resolution Rules
//!
//! | Order | Condition | Phase | Time remaining |
//! |-------|-----------|-------|----------------|
//! | 1 | `!exists` | `NotStarted` | 0 |
//! | 2 | `finalized` | `Finalized` | 0 |
//! | 3 | `now < commit_end` | `Commit` | `commit_end - now` |
//! | 4 | `now < reveal_end` | `Reveal` | `reveal_end - now` |
//! | 5 | otherwise | `PendingFinalization` | 0 |
//!
//! Registration status of a won name follows the same approach:
//! `Active` until expiry, `Renewable` for a 90-day grace window, then
//! `Expired`. A name released before expiry is `Expired` straight away.
//!
//! ## Usage
//!
//! ```ignore
//! use nns_03_auction_phase::{resolve_phase, AuctionSnapshot};
//!
//! let status = resolve_phase(&AuctionSnapshot::open(1000, 2000), now);
//! if status.accepts_reveal() {
//!     engine.reveal(record.reveal_args())?;
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemorySnapshotSource;
pub use domain::{
    registration_status, resolve_phase, AuctionPhase, AuctionSnapshot, DomainMeta, PhaseError,
    PhaseStatus, RegistrationStatus, EXPIRY_WARNING_SECS, GRACE_PERIOD_DAYS, GRACE_PERIOD_SECS,
};
pub use ports::outbound::{AuctionSnapshotSource, TimeSource};
pub use service::PhaseTracker;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 3;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Auction Phase Resolver";
