//! # Recipient Resolution
//!
//! Turns a classified reference into a concrete address.

use crate::domain::classifier::{classify, RecipientReference};
use crate::domain::errors::RecipientError;
use crate::domain::names::format_name;
use crate::ports::outbound::NameResolver;
use shared_types::Address;

/// Address for `reference`. Names are looked up in their formatted form.
pub fn resolve_recipient<R: NameResolver + ?Sized>(
    reference: &RecipientReference,
    resolver: &R,
) -> Result<Address, RecipientError> {
    match reference {
        RecipientReference::Address(addr) => Ok(*addr),
        RecipientReference::Name(name) => {
            let formatted = format_name(name);
            let owner = resolver
                .resolve(&formatted)
                .ok_or(RecipientError::NotFound { name: formatted })?;
            tracing::debug!(subsystem = "nns-04", name = %name, owner = %owner, "Resolved name");
            Ok(owner)
        }
        RecipientReference::Unknown(input) => Err(RecipientError::Unclassifiable {
            input: input.clone(),
        }),
    }
}

/// Classify and resolve in one step.
pub fn resolve_input<R: NameResolver + ?Sized>(
    input: &str,
    resolver: &R,
) -> Result<Address, RecipientError> {
    resolve_recipient(&classify(input), resolver)
}
