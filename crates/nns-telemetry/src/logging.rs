//! Structured logging helpers.
//!
//! Every event carries a `subsystem` field so lines from different crates
//! can be filtered apart in aggregated output. The macros resolve `tracing`
//! through this crate, so callers need no direct `tracing` dependency.

/// Helper to create structured log entries with consistent formatting.
#[macro_export]
macro_rules! log_event {
    // Info level with subsystem
    (info, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        $crate::tracing::info!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    // Warn level with subsystem
    (warn, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        $crate::tracing::warn!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    // Error level with subsystem
    (error, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        $crate::tracing::error!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    // Debug level with subsystem
    (debug, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        $crate::tracing::debug!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a bid-related event with standard fields.
#[macro_export]
macro_rules! log_bid_event {
    ($level:ident, $subsystem:expr, $msg:expr, $auction_id:expr, $commitment:expr $(, $($field:tt)*)?) => {
        $crate::tracing::$level!(
            subsystem = $subsystem,
            auction_id = %$auction_id,
            commitment = %$commitment,
            $($($field)*,)?
            $msg
        )
    };
}
