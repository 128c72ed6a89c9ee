//! Ledger serializers.

mod json;

pub use json::JsonLedgerSerializer;
