//! # Ports
//!
//! - `outbound`: read side of the auction engine, and the clock

pub mod outbound;
