//! Test fixtures shared by the unit tests.

use crate::domain::entities::BidRecord;
use nns_01_commitment::Secret;
use shared_types::{Hash, U256};

/// A record whose secret and commitment are derived from `tag`.
///
/// Distinct tags give distinct commitments; the commitment is not a real
/// keccak commitment, which is all the ledger needs.
pub fn make_record(auction_id: &str, amount: u64, tag: u8, created_at: u64) -> BidRecord {
    BidRecord {
        auction_id: auction_id.to_string(),
        bid_amount: U256::from(amount),
        secret_text: format!("text-{tag}"),
        secret_bytes: Secret::new([tag; 32]),
        commitment: Hash::new([tag.wrapping_add(0x80); 32]),
        created_at,
    }
}

/// Run `f` under a plain-text subscriber and return everything it logged.
pub fn capture_logs(f: impl FnOnce()) -> String {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
