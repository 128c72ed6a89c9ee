use crate::domain::names::format_name;
use crate::ports::outbound::NameResolver;
use shared_types::Address;
use std::collections::HashMap;

/// Fixed name table, for tests and offline use.
#[derive(Debug, Default, Clone)]
pub struct InMemoryNameResolver {
    owners: HashMap<String, Address>,
}

impl InMemoryNameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` (formatted before storing) to `owner`.
    pub fn insert(&mut self, name: &str, owner: Address) {
        self.owners.insert(format_name(name), owner);
    }

    #[must_use]
    pub fn with(mut self, name: &str, owner: Address) -> Self {
        self.insert(name, owner);
        self
    }
}

impl NameResolver for InMemoryNameResolver {
    fn resolve(&self, name: &str) -> Option<Address> {
        self.owners.get(name).copied()
    }
}
