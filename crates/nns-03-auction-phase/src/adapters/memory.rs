use crate::domain::errors::PhaseError;
use crate::domain::phase::AuctionSnapshot;
use crate::domain::registration::DomainMeta;
use crate::ports::outbound::AuctionSnapshotSource;
use std::collections::HashMap;

/// Engine state held in memory, for tests and offline tooling.
#[derive(Debug, Default, Clone)]
pub struct InMemorySnapshotSource {
    auctions: HashMap<String, AuctionSnapshot>,
    domains: HashMap<String, DomainMeta>,
}

impl InMemorySnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the auction state for `name`.
    pub fn set_snapshot(&mut self, name: impl Into<String>, snapshot: AuctionSnapshot) {
        self.auctions.insert(name.into(), snapshot);
    }

    /// Replace the registration data for `name`.
    pub fn set_domain(&mut self, name: impl Into<String>, meta: DomainMeta) {
        self.domains.insert(name.into(), meta);
    }
}

impl AuctionSnapshotSource for InMemorySnapshotSource {
    fn snapshot(&self, name: &str) -> Result<AuctionSnapshot, PhaseError> {
        Ok(self
            .auctions
            .get(name)
            .copied()
            .unwrap_or_else(AuctionSnapshot::not_started))
    }

    fn domain_meta(&self, name: &str) -> Result<DomainMeta, PhaseError> {
        self.domains
            .get(name)
            .cloned()
            .ok_or_else(|| PhaseError::UnknownDomain {
                name: name.to_string(),
            })
    }
}
