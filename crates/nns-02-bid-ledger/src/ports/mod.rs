//! # Ports
//!
//! - `inbound`: the API this crate offers
//! - `outbound`: what the host must provide (a store, a serializer, a clock)

pub mod inbound;
pub mod outbound;
