//! # Domain Layer (Inner Hexagon)
//!
//! Pure commitment logic. NO I/O, NO stored state.

pub mod abi;
pub mod errors;
pub mod preparation;
pub mod secret;
pub mod services;

pub use abi::*;
pub use errors::*;
pub use preparation::*;
pub use secret::*;
pub use services::*;
