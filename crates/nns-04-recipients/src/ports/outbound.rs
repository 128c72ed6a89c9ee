//! # Outbound Ports (Driven Ports)

use shared_types::Address;

/// Name-to-owner lookup, backed by the external registry.
pub trait NameResolver: Send + Sync {
    /// Owner of `name`, or `None` if nobody holds it.
    ///
    /// `name` is always lowercase and carries the suffix.
    fn resolve(&self, name: &str) -> Option<Address>;
}
