//! NNS-CLI: command line for the sealed-bid name auction
//!
//! Prepares commitments, keeps the local bid ledger, and prints what the
//! engine needs at reveal time.

mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use commands::Command;
use nns_02_bid_ledger::{FileBidLedger, LedgerConfig};
use nns_telemetry::{init_telemetry, TelemetryConfig};

/// NNS-CLI: sealed-bid auction helper
#[derive(Parser, Debug)]
#[command(name = "nns-cli")]
#[command(about = "Prepare, record and reveal sealed bids for .ntu names")]
struct Args {
    /// Ledger file (overrides NNS_LEDGER_PATH)
    #[arg(short, long, global = true)]
    ledger: Option<PathBuf>,

    /// Log filter (overrides NNS_LOG_LEVEL / RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if let Some(level) = args.log_level {
        telemetry.log_level = level;
    }
    telemetry.json_logs |= args.json_logs;
    init_telemetry(telemetry).context("Failed to initialize logging")?;

    let mut config = LedgerConfig::from_env();
    if let Some(path) = args.ledger {
        config.store_path = path;
    }
    nns_telemetry::log_event!(
        debug,
        commands::LOG_SUBSYSTEM,
        "Using bid ledger",
        path = %config.store_path.display()
    );

    let mut ledger = FileBidLedger::file_backed(config);
    let stdout = io::stdout();
    let span = nns_telemetry::subsystem_span!("command", subsystem = commands::LOG_SUBSYSTEM);
    let _entered = span.enter();
    commands::run(args.command, &mut ledger, &mut stdout.lock())
}
