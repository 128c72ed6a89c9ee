//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the phase tracker.

use crate::domain::errors::PhaseError;
use crate::domain::phase::AuctionSnapshot;
use crate::domain::registration::DomainMeta;

pub use shared_types::TimeSource;

/// Read side of the external auction engine.
///
/// Implementations must return the engine's current state; callers never
/// cache what comes back.
pub trait AuctionSnapshotSource: Send + Sync {
    /// Auction state for `name`. A name nobody has bid on yields a snapshot
    /// with `exists == false`, not an error.
    fn snapshot(&self, name: &str) -> Result<AuctionSnapshot, PhaseError>;

    /// Registration data for a won name.
    fn domain_meta(&self, name: &str) -> Result<DomainMeta, PhaseError>;
}

impl<S: AuctionSnapshotSource + ?Sized> AuctionSnapshotSource for &S {
    fn snapshot(&self, name: &str) -> Result<AuctionSnapshot, PhaseError> {
        (**self).snapshot(name)
    }

    fn domain_meta(&self, name: &str) -> Result<DomainMeta, PhaseError> {
        (**self).domain_meta(name)
    }
}
