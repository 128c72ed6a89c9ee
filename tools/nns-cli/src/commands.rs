//! Subcommand definitions and their execution.
//!
//! Commands write to any `io::Write` and take the ledger by trait, so the
//! same code runs against the file store and an in-memory one.

use std::io::Write;

use anyhow::{bail, Context};
use clap::Subcommand;

use nns_01_commitment::{derive_secret_bytes, random_memorable_text, random_secret, BidPreparation};
use nns_02_bid_ledger::{BidLedgerApi, BidRecord};
use nns_03_auction_phase::{resolve_phase, AuctionSnapshot};
use nns_04_recipients::{classify, format_name, validate_name, RecipientReference};
use shared_types::{format_ether, parse_ether, Address, Hash, SystemTimeSource, TimeSource};

/// `subsystem` field on events logged by the CLI.
pub const LOG_SUBSYSTEM: &str = "nns-cli";

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate a fresh secret
    Secret {
        /// Produce a memorable text instead of raw bytes
        #[arg(short, long)]
        memorable: bool,
    },

    /// Compute a commitment and record the bid
    Commit {
        /// Name to bid on (".ntu" appended if missing)
        #[arg(short, long)]
        name: String,

        /// Bid in ether, e.g. 0.5
        #[arg(short, long)]
        amount: String,

        /// Bidder address
        #[arg(short, long)]
        bidder: String,

        /// Secret text (random memorable text if omitted)
        #[arg(short, long)]
        secret_text: Option<String>,
    },

    /// List recorded bids
    List {
        /// Only bids for this name
        #[arg(short, long)]
        auction: Option<String>,
    },

    /// Show the highest recorded bid for a name
    Highest {
        #[arg(short, long)]
        auction: String,
    },

    /// Verify the highest bid for a name and print its reveal arguments
    Reveal {
        #[arg(short, long)]
        auction: String,

        /// Address that made the commitment
        #[arg(short, long)]
        bidder: String,
    },

    /// Remove every bid with the given commitment
    Remove {
        #[arg(short, long)]
        commitment: String,
    },

    /// Remove all bids
    Clear,

    /// Resolve the auction phase for the given windows
    Phase {
        #[arg(long)]
        commit_end: u64,

        #[arg(long)]
        reveal_end: u64,

        #[arg(long)]
        finalized: bool,

        /// Treat the auction as not yet opened
        #[arg(long)]
        not_started: bool,

        /// Seconds since epoch (defaults to the system clock)
        #[arg(long)]
        now: Option<u64>,
    },

    /// Classify a recipient as address, name or unknown
    Classify { input: String },

    /// Check a name against the registration rules
    Validate { name: String },
}

/// Execute `command` against `ledger`, writing human-readable output to `out`.
pub fn run<L, W>(command: Command, ledger: &mut L, out: &mut W) -> anyhow::Result<()>
where
    L: BidLedgerApi,
    W: Write,
{
    match command {
        Command::Secret { memorable } => secret(memorable, out),
        Command::Commit {
            name,
            amount,
            bidder,
            secret_text,
        } => commit(ledger, &name, &amount, &bidder, secret_text, out),
        Command::List { auction } => list(ledger, auction.as_deref(), out),
        Command::Highest { auction } => highest(ledger, &auction, out),
        Command::Reveal { auction, bidder } => reveal(ledger, &auction, &bidder, out),
        Command::Remove { commitment } => remove(ledger, &commitment, out),
        Command::Clear => {
            ledger.clear().context("Failed to clear ledger")?;
            writeln!(out, "Ledger cleared")?;
            Ok(())
        }
        Command::Phase {
            commit_end,
            reveal_end,
            finalized,
            not_started,
            now,
        } => {
            let snapshot = AuctionSnapshot {
                exists: !not_started,
                finalized,
                commit_end,
                reveal_end,
            };
            let now = now.unwrap_or_else(|| SystemTimeSource.now());
            let status = resolve_phase(&snapshot, now);
            writeln!(out, "phase: {}", status.phase)?;
            writeln!(out, "time remaining: {}s", status.time_remaining)?;
            Ok(())
        }
        Command::Classify { input } => {
            match classify(&input) {
                RecipientReference::Address(addr) => writeln!(out, "address {addr}")?,
                RecipientReference::Name(name) => writeln!(out, "name {}", format_name(&name))?,
                RecipientReference::Unknown(raw) => writeln!(out, "unknown '{raw}'")?,
            }
            Ok(())
        }
        Command::Validate { name } => {
            validate_name(&name).with_context(|| format!("'{}' is not a valid name", name.trim()))?;
            writeln!(out, "'{}' is valid", name.trim())?;
            Ok(())
        }
    }
}

fn parse_address(input: &str) -> anyhow::Result<Address> {
    input
        .trim()
        .parse()
        .with_context(|| format!("Invalid address '{input}'"))
}

fn write_record<W: Write>(out: &mut W, record: &BidRecord) -> std::io::Result<()> {
    writeln!(
        out,
        "{}  {}  {} ETH  {}",
        record.created_at,
        record.auction_id,
        format_ether(record.bid_amount),
        record.commitment
    )
}

fn secret<W: Write>(memorable: bool, out: &mut W) -> anyhow::Result<()> {
    if memorable {
        let text = random_memorable_text();
        writeln!(out, "text:   {text}")?;
        writeln!(out, "secret: {}", derive_secret_bytes(&text).to_hex())?;
    } else {
        writeln!(out, "secret: {}", random_secret().to_hex())?;
    }
    Ok(())
}

fn commit<L: BidLedgerApi, W: Write>(
    ledger: &mut L,
    name: &str,
    amount: &str,
    bidder: &str,
    secret_text: Option<String>,
    out: &mut W,
) -> anyhow::Result<()> {
    let name = format_name(name);
    validate_name(&name).with_context(|| format!("'{name}' is not a valid name"))?;
    let amount = parse_ether(amount).with_context(|| format!("Invalid amount '{amount}'"))?;
    let bidder = parse_address(bidder)?;

    let mut preparation = BidPreparation::new(name, amount, bidder);
    if let Some(text) = secret_text {
        preparation = preparation.secret_text(text);
    }
    let bid = preparation.prepare();

    let record = BidRecord::from_prepared(&bid, ledger.next_created_at());
    ledger.store(record).context("Failed to record bid")?;

    nns_telemetry::log_bid_event!(info, LOG_SUBSYSTEM, "Bid recorded", bid.name, bid.commitment);

    writeln!(out, "name:        {}", bid.name)?;
    writeln!(out, "amount:      {} ETH ({} wei)", format_ether(bid.bid_amount), bid.bid_amount)?;
    writeln!(out, "secret text: {}", bid.secret_text)?;
    writeln!(out, "commitment:  {}", bid.commitment)?;
    Ok(())
}

fn list<L: BidLedgerApi, W: Write>(
    ledger: &L,
    auction: Option<&str>,
    out: &mut W,
) -> anyhow::Result<()> {
    let records = match auction {
        Some(name) => ledger.list_for(&format_name(name)),
        None => ledger.all(),
    };
    if records.is_empty() {
        writeln!(out, "No bids recorded")?;
    }
    for record in &records {
        write_record(out, record)?;
    }
    Ok(())
}

fn highest<L: BidLedgerApi, W: Write>(ledger: &L, auction: &str, out: &mut W) -> anyhow::Result<()> {
    match ledger.highest_for(&format_name(auction)) {
        Some(record) => write_record(out, &record)?,
        None => writeln!(out, "No bids recorded")?,
    }
    Ok(())
}

fn reveal<L: BidLedgerApi, W: Write>(
    ledger: &L,
    auction: &str,
    bidder: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let auction = format_name(auction);
    let bidder = parse_address(bidder)?;
    let Some(record) = ledger.highest_for(&auction) else {
        bail!("No recorded bid for '{auction}'");
    };

    record
        .verify(bidder)
        .context("Stored commitment does not match; the engine would reject this reveal")?;

    let args = record.reveal_args();
    writeln!(out, "name:   {}", args.name)?;
    writeln!(out, "amount: {}", args.bid_amount)?;
    writeln!(out, "secret: {}", args.secret.to_hex())?;
    Ok(())
}

fn remove<L: BidLedgerApi, W: Write>(
    ledger: &mut L,
    commitment: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let commitment: Hash = commitment
        .trim()
        .parse()
        .with_context(|| format!("Invalid commitment '{commitment}'"))?;
    let removed = ledger.remove(&commitment).context("Failed to update ledger")?;
    writeln!(out, "Removed {removed} bid(s)")?;
    Ok(())
}
