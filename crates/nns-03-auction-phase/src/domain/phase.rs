//! Auction phase state machine.
//!
//! ```text
//! [NOT_STARTED] ──auction created──→ [COMMIT] ──now >= commit_end──→ [REVEAL]
//!                                                                      │
//!                                                        now >= reveal_end
//!                                                                      ↓
//!                        [FINALIZED] ←──finalize()── [PENDING_FINALIZATION]
//! ```
//!
//! The phase is never stored. It is recomputed from a fresh snapshot and the
//! current time on every call.

use serde::{Deserialize, Serialize};
use shared_types::Timestamp;
use std::fmt;

/// Engine-reported auction state, read fresh for every resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuctionSnapshot {
    /// False until the first commit opens the auction.
    pub exists: bool,
    /// Set once the engine has settled the auction.
    pub finalized: bool,
    /// First second of the reveal window.
    pub commit_end: Timestamp,
    /// First second after the reveal window.
    pub reveal_end: Timestamp,
}

impl AuctionSnapshot {
    /// Snapshot for an auction that has not been opened.
    pub const fn not_started() -> Self {
        Self {
            exists: false,
            finalized: false,
            commit_end: 0,
            reveal_end: 0,
        }
    }

    /// Snapshot for an open, unfinalized auction.
    pub const fn open(commit_end: Timestamp, reveal_end: Timestamp) -> Self {
        Self {
            exists: true,
            finalized: false,
            commit_end,
            reveal_end,
        }
    }

    /// Same windows, marked finalized.
    #[must_use]
    pub const fn finalize(self) -> Self {
        Self {
            finalized: true,
            ..self
        }
    }
}

/// Mutually exclusive auction windows, in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AuctionPhase {
    /// No commit has opened the auction yet.
    NotStarted,
    /// Accepting sealed commitments.
    Commit,
    /// Accepting reveals of earlier commitments.
    Reveal,
    /// Reveal window closed; waiting for someone to finalize.
    PendingFinalization,
    /// Settled. Terminal.
    Finalized,
}

impl fmt::Display for AuctionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotStarted => "not started",
            Self::Commit => "commit",
            Self::Reveal => "reveal",
            Self::PendingFinalization => "pending finalization",
            Self::Finalized => "finalized",
        };
        f.write_str(label)
    }
}

/// A resolved phase and the seconds left in its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseStatus {
    /// Phase at the time of resolution.
    pub phase: AuctionPhase,
    /// Zero outside the commit and reveal windows.
    pub time_remaining: u64,
}

impl PhaseStatus {
    /// The engine will take a new commitment.
    ///
    /// A name with no auction yet is opened by its first commit.
    pub fn accepts_commit(&self) -> bool {
        matches!(self.phase, AuctionPhase::NotStarted | AuctionPhase::Commit)
    }

    /// The engine will take a reveal.
    pub fn accepts_reveal(&self) -> bool {
        self.phase == AuctionPhase::Reveal
    }

    /// The auction can be settled.
    pub fn can_finalize(&self) -> bool {
        self.phase == AuctionPhase::PendingFinalization
    }
}

/// Resolve the phase of `snapshot` at `now`.
///
/// Rules are checked in order: missing auction, finalized flag, then the two
/// windows. For a fixed snapshot the phase never moves backwards as `now`
/// grows.
pub fn resolve_phase(snapshot: &AuctionSnapshot, now: Timestamp) -> PhaseStatus {
    let (phase, time_remaining) = if !snapshot.exists {
        (AuctionPhase::NotStarted, 0)
    } else if snapshot.finalized {
        (AuctionPhase::Finalized, 0)
    } else if now < snapshot.commit_end {
        (AuctionPhase::Commit, snapshot.commit_end.saturating_sub(now))
    } else if now < snapshot.reveal_end {
        (AuctionPhase::Reveal, snapshot.reveal_end.saturating_sub(now))
    } else {
        (AuctionPhase::PendingFinalization, 0)
    };

    PhaseStatus {
        phase,
        time_remaining,
    }
}
