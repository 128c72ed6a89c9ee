//! # Ledger Persistence
//!
//! The ledger is the only place reveal inputs live. These flows check that
//! they survive restarts, that damage degrades to an empty ledger rather
//! than a crash, and that engine state can be joined back onto it.

use std::sync::Arc;

use nns_01_commitment::BidPreparation;
use nns_02_bid_ledger::{
    BidLedgerApi, BidRecord, FileBackedKVStore, FileBidLedger, KeyValueStore, LedgerConfig,
    LedgerError,
};
use shared_types::{parse_ether, Address, ManualTimeSource};

use crate::engine::{MockAuctionEngine, COMMIT_DURATION};

const START: u64 = 1_700_000_000;

fn bidder() -> Address {
    Address::new([0x42; 20])
}

fn config_in(dir: &tempfile::TempDir) -> LedgerConfig {
    LedgerConfig::default().with_store_path(dir.path().join("ledger").join("bids.db"))
}

#[test]
fn test_reveal_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(ManualTimeSource::at_secs(START));
    let mut engine = MockAuctionEngine::new(Arc::clone(&clock));
    let amount = parse_ether("0.25").unwrap();

    {
        let mut ledger = FileBidLedger::file_backed(config_in(&dir));
        let bid = BidPreparation::new("persist.ntu", amount, bidder()).prepare();
        ledger
            .store(BidRecord::from_prepared(&bid, ledger.next_created_at()))
            .unwrap();
        engine
            .commit("persist.ntu", bidder(), bid.commitment, amount)
            .unwrap();
    }

    clock.set_secs(START + COMMIT_DURATION);

    let ledger = FileBidLedger::file_backed(config_in(&dir));
    let record = ledger.highest_for("persist.ntu").unwrap();
    let args = record.reveal_args();
    engine
        .reveal(&args.name, bidder(), args.bid_amount, args.secret.as_bytes())
        .unwrap();
}

#[test]
fn test_sequential_handles_accumulate_records() {
    let dir = tempfile::tempdir().unwrap();
    let amount = parse_ether("1").unwrap();

    for (i, name) in ["a1.ntu", "b2.ntu", "a1.ntu"].iter().enumerate() {
        let mut ledger = FileBidLedger::file_backed(config_in(&dir));
        let bid = BidPreparation::new(*name, amount, bidder())
            .secret_text(format!("text-{i}"))
            .prepare();
        ledger
            .store(BidRecord::from_prepared(&bid, ledger.next_created_at()))
            .unwrap();
    }

    let ledger = FileBidLedger::file_backed(config_in(&dir));
    let a1 = ledger.list_for("a1.ntu");
    assert_eq!(a1.len(), 2);
    assert_eq!(a1[0].secret_text, "text-0");
    assert_eq!(a1[1].secret_text, "text-2");
    assert!(a1[0].created_at < a1[1].created_at);
    assert_eq!(ledger.list_for("b2.ntu").len(), 1);
}

#[test]
fn test_corrupt_document_on_disk_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    {
        let mut store = FileBackedKVStore::new(&config.store_path);
        store
            .put(config.scope_key.as_bytes(), br#"[{"auction_id": "x.ntu""#)
            .unwrap();
    }

    let mut ledger = FileBidLedger::file_backed(config.clone());
    assert!(ledger.all().is_empty());
    assert!(ledger.list_for("x.ntu").is_empty());
    assert!(matches!(
        ledger.load_records(),
        Err(LedgerError::Corrupt { .. })
    ));

    // Recovering by writing a fresh ledger over the damage.
    let bid = BidPreparation::new("x.ntu", parse_ether("1").unwrap(), bidder()).prepare();
    ledger.store(BidRecord::from_prepared(&bid, 1)).unwrap();
    let reopened = FileBidLedger::file_backed(config.clone());
    assert_eq!(reopened.load_records().unwrap().len(), 1);

    let store = FileBackedKVStore::open(&config.store_path).unwrap();
    assert_eq!(
        store.get(config.corrupt_key().as_bytes()).unwrap(),
        Some(br#"[{"auction_id": "x.ntu""#.to_vec())
    );
}

#[test]
fn test_truncated_store_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    {
        let mut ledger = FileBidLedger::file_backed(config.clone());
        let bid = BidPreparation::new("cut.ntu", parse_ether("1").unwrap(), bidder()).prepare();
        ledger.store(BidRecord::from_prepared(&bid, 1)).unwrap();
    }

    let bytes = std::fs::read(&config.store_path).unwrap();
    std::fs::write(&config.store_path, &bytes[..bytes.len() / 2]).unwrap();

    let ledger = FileBidLedger::file_backed(config);
    assert!(ledger.all().is_empty());
    assert!(ledger.highest_for("cut.ntu").is_none());
}

#[test]
fn test_reconcile_with_engine() {
    let clock = Arc::new(ManualTimeSource::at_secs(START));
    let mut engine = MockAuctionEngine::new(Arc::clone(&clock));
    let mut ledger = nns_02_bid_ledger::InMemoryBidLedger::in_memory();
    let amount = parse_ether("1").unwrap();

    let known = BidPreparation::new("known.ntu", amount, bidder()).prepare();
    ledger
        .store(BidRecord::from_prepared(&known, ledger.next_created_at()))
        .unwrap();
    engine
        .commit("known.ntu", bidder(), known.commitment, amount)
        .unwrap();

    // Made from another device: the engine has it, this ledger does not.
    clock.advance_millis(1_000);
    let foreign = BidPreparation::new("foreign.ntu", amount, bidder()).prepare();
    engine
        .commit("foreign.ntu", bidder(), foreign.commitment, amount)
        .unwrap();

    let joined = ledger.reconcile(&engine.unrevealed_for(bidder()));
    assert_eq!(joined.len(), 2);
    assert_eq!(joined[0].auction_id(), Some("known.ntu"));
    assert!(joined[0].is_revealable());
    assert_eq!(joined[1].commitment, foreign.commitment);
    assert!(!joined[1].is_revealable());
}

#[test]
fn test_remove_after_reveal() {
    let dir = tempfile::tempdir().unwrap();
    let mut ledger = FileBidLedger::file_backed(config_in(&dir));
    let bid = BidPreparation::new("done.ntu", parse_ether("1").unwrap(), bidder()).prepare();
    ledger
        .store(BidRecord::from_prepared(&bid, ledger.next_created_at()))
        .unwrap();

    assert_eq!(ledger.remove(&bid.commitment).unwrap(), 1);
    assert_eq!(ledger.remove(&bid.commitment).unwrap(), 0);
    assert!(FileBidLedger::file_backed(config_in(&dir)).all().is_empty());
}
