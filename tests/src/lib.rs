//! # NNS Test Suite
//!
//! Cross-subsystem flows that no single crate can test alone.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── engine.rs         # Mock auction engine with an independent encoder
//! │
//! └── integration/
//!     ├── auction_flow.rs       # commit → reveal → finalize → resolve
//!     ├── ledger_persistence.rs # restarts, corruption, reconciliation
//!     └── properties.rs         # determinism, sensitivity, encoder agreement
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p nns-tests
//! cargo test -p nns-tests integration::auction_flow::
//! ```

pub mod engine;
pub mod integration;
