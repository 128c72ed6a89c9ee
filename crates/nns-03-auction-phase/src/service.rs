//! # Phase Tracker Service
//!
//! Pairs a snapshot source with a clock. Every query reads a fresh snapshot
//! and the current time; nothing is cached between calls.

use crate::domain::errors::PhaseError;
use crate::domain::phase::{resolve_phase, PhaseStatus};
use crate::domain::registration::{registration_status, RegistrationStatus};
use crate::ports::outbound::{AuctionSnapshotSource, TimeSource};

/// Resolves auction phases and registration status against live engine state.
pub struct PhaseTracker<S, T>
where
    S: AuctionSnapshotSource,
    T: TimeSource,
{
    source: S,
    time_source: T,
}

impl<S, T> PhaseTracker<S, T>
where
    S: AuctionSnapshotSource,
    T: TimeSource,
{
    pub fn new(source: S, time_source: T) -> Self {
        Self {
            source,
            time_source,
        }
    }

    /// Current phase of the auction for `name`.
    pub fn status(&self, name: &str) -> Result<PhaseStatus, PhaseError> {
        let snapshot = self.source.snapshot(name)?;
        let status = resolve_phase(&snapshot, self.time_source.now());

        tracing::debug!(
            subsystem = "nns-03",
            auction = name,
            phase = %status.phase,
            time_remaining = status.time_remaining,
            "Resolved auction phase"
        );

        Ok(status)
    }

    /// Registration lifecycle position of `name`.
    pub fn registration(&self, name: &str) -> Result<RegistrationStatus, PhaseError> {
        let meta = self.source.domain_meta(name)?;
        Ok(registration_status(&meta, self.time_source.now()))
    }

    /// Underlying snapshot source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the snapshot source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
