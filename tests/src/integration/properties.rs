//! # Commitment Properties
//!
//! Sampled checks over many inputs. The generator here only produces test
//! data; secrets used for real bids always come from the OS generator.

use nns_01_commitment::{derive_secret_bytes, make_commitment, Secret};
use nns_02_bid_ledger::{BidLedgerApi, BidRecord, InMemoryBidLedger};
use nns_04_recipients::{classify, RecipientReference};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use shared_types::{Address, Hash, U256};

use crate::engine::reference_commitment;

const SAMPLES: usize = 64;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x4e4e_5321)
}

fn random_name<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}

fn random_inputs<R: RngCore>(rng: &mut R) -> (U256, Secret, Address) {
    let mut amount = [0u8; 32];
    let mut secret = [0u8; 32];
    let mut bidder = [0u8; 20];
    rng.fill_bytes(&mut amount);
    rng.fill_bytes(&mut secret);
    rng.fill_bytes(&mut bidder);
    (
        U256::from_big_endian(&amount),
        Secret::new(secret),
        Address::new(bidder),
    )
}

#[test]
fn test_commitment_agrees_with_engine_encoder() {
    let mut rng = rng();
    // Lengths around every padding boundary, plus random ones.
    let mut lengths = vec![0, 1, 31, 32, 33, 63, 64, 65, 100];
    lengths.extend((0..SAMPLES).map(|_| rng.gen_range(0..200)));

    for len in lengths {
        let name = random_name(&mut rng, len);
        let (amount, secret, bidder) = random_inputs(&mut rng);
        assert_eq!(
            make_commitment(&name, amount, &secret, bidder),
            reference_commitment(&name, amount, secret.as_bytes(), &bidder),
            "encoders disagree for a {len}-byte name"
        );
    }
}

#[test]
fn test_commitment_agrees_for_multibyte_names() {
    let (amount, secret, bidder) = random_inputs(&mut rng());
    for name in ["café.ntu", "名前.ntu", "🦀🦀🦀🦀🦀🦀🦀🦀.ntu"] {
        assert_eq!(
            make_commitment(name, amount, &secret, bidder),
            reference_commitment(name, amount, secret.as_bytes(), &bidder)
        );
    }
}

#[test]
fn test_commitment_is_deterministic() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let name = random_name(&mut rng, 12);
        let (amount, secret, bidder) = random_inputs(&mut rng);
        assert_eq!(
            make_commitment(&name, amount, &secret, bidder),
            make_commitment(&name, amount, &secret.clone(), bidder)
        );
    }
}

#[test]
fn test_single_bit_flip_changes_commitment() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let name = random_name(&mut rng, 10);
        let (amount, secret, bidder) = random_inputs(&mut rng);
        let base = make_commitment(&name, amount, &secret, bidder);

        let bit = rng.gen_range(0..256);
        let mut flipped = *secret.as_bytes();
        flipped[bit / 8] ^= 1 << (bit % 8);

        assert_ne!(
            base,
            make_commitment(&name, amount, &Secret::new(flipped), bidder),
            "bit {bit} flip went unnoticed"
        );
    }
}

#[test]
fn test_text_derivation_is_stable_and_distinct() {
    let mut rng = rng();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..SAMPLES {
        let text = format!("{}-{}", random_name(&mut rng, 6), rng.gen_range(0..10_000));
        let secret = derive_secret_bytes(&text);
        assert_eq!(secret, derive_secret_bytes(&text));
        seen.insert((text, Hash::new(*secret.as_bytes())));
    }
    let distinct: std::collections::HashSet<_> = seen.iter().map(|(_, h)| *h).collect();
    let texts: std::collections::HashSet<_> = seen.iter().map(|(t, _)| t.clone()).collect();
    assert_eq!(distinct.len(), texts.len());
}

#[test]
fn test_highest_tie_break_through_ledger() {
    let mut ledger = InMemoryBidLedger::in_memory();
    let bidder = Address::new([9; 20]);
    let mut commitments = Vec::new();

    for (i, amount) in [5u64, 7, 7, 3].into_iter().enumerate() {
        let secret = Secret::new([i as u8; 32]);
        let commitment = make_commitment("a.ntu", U256::from(amount), &secret, bidder);
        commitments.push(commitment);
        ledger
            .store(BidRecord {
                auction_id: "a.ntu".into(),
                bid_amount: U256::from(amount),
                secret_text: String::new(),
                secret_bytes: secret,
                commitment,
                created_at: ledger.next_created_at(),
            })
            .unwrap();
    }
    ledger
        .store(BidRecord {
            auction_id: "b.ntu".into(),
            bid_amount: U256::from(100u64),
            secret_text: String::new(),
            secret_bytes: Secret::new([0xFF; 32]),
            commitment: Hash::new([0xFF; 32]),
            created_at: ledger.next_created_at(),
        })
        .unwrap();

    assert_eq!(ledger.list_for("a.ntu").len(), 4);
    assert_eq!(ledger.highest_for("a.ntu").unwrap().commitment, commitments[1]);
}

#[test]
fn test_classification_examples() {
    let hex = "f39fd6e51aad88f6f4ce6ab8827279cfffb92266";
    assert!(matches!(classify("alice.ntu"), RecipientReference::Name(_)));
    assert!(matches!(classify("ALICE.NTU"), RecipientReference::Name(_)));
    assert!(matches!(
        classify(&format!("0x{hex}")),
        RecipientReference::Address(_)
    ));
    match classify(hex) {
        RecipientReference::Address(addr) => assert_eq!(addr.to_hex(), format!("0x{hex}")),
        other => panic!("expected address, got {other:?}"),
    }
    assert!(classify("not-a-domain").is_unknown());
}
