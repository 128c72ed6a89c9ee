//! # Shared Types Crate
//!
//! Fixed-width primitives, unit conversion and the clock port shared by the
//! NNS subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Addresses, hashes and amounts used by more
//!   than one subsystem are defined here.
//! - **Hex at the edges**: Values serialize as `0x`-prefixed lowercase hex so
//!   persisted ledgers stay readable and match what the auction engine reports.

pub mod clock;
pub mod entities;
pub mod errors;
pub mod units;

pub use clock::{ManualTimeSource, SystemTimeSource, TimeSource};
pub use entities::*;
pub use errors::*;
pub use units::{format_ether, parse_ether};
