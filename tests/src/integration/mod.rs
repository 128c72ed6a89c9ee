//! Cross-subsystem integration tests.

#[cfg(test)]
mod ledger_persistence;
#[cfg(test)]
mod properties;
