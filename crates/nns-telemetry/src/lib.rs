//! # NNS Telemetry
//!
//! Structured logging for NNS binaries. Library crates only emit `tracing`
//! events; a binary calls `init_telemetry` once to decide where they go.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nns_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(TelemetryConfig::from_env())?;
//!     nns_telemetry::log_event!(info, "nns-cli", "started");
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `nns` | Service name in log lines |
//! | `NNS_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `NNS_JSON_LOGS` | `false` | JSON output |
//! | `NNS_CONSOLE_OUTPUT` | `true` | Disable to silence output |
//! | `NNS_SUBSYSTEM_ID` | `00` | Subsystem identifier |

mod config;
mod logging;
mod tracing_setup;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};

#[doc(hidden)]
pub use tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Install the global subscriber described by `config`.
///
/// Fails if a subscriber is already installed.
pub fn init_telemetry(config: TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_setup::init_tracing(&config)
}

/// Convenience macro for creating a span with subsystem context.
///
/// # Example
///
/// ```rust,ignore
/// let _span = nns_telemetry::subsystem_span!("store_bid", subsystem = "nns-02", auction = "alice.ntu");
/// ```
#[macro_export]
macro_rules! subsystem_span {
    ($name:expr, $($field:tt)*) => {
        $crate::tracing::info_span!($name, $($field)*)
    };
}
