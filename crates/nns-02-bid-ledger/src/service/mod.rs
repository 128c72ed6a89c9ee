//! # Bid Ledger Service
//!
//! The main service implementing `BidLedgerApi`.
//!
//! Every call loads the ledger document fresh from the store, so handles
//! sharing one store value always agree. Separate `FileBackedKVStore`
//! values on the same path do not: each caches the file at open, and the
//! last writer wins. Mutations are read-modify-write of the whole document
//! followed by a single `put`.


use crate::adapters::{FileBackedKVStore, InMemoryKVStore, JsonLedgerSerializer};
use crate::domain::config::LedgerConfig;
use crate::domain::entities::{BidRecord, CreatedAt, OnChainCommitment, ReconciledCommitment};
use crate::domain::errors::LedgerError;
use crate::domain::ledger;
use crate::ports::inbound::BidLedgerApi;
use crate::ports::outbound::{KeyValueStore, LedgerSerializer, TimeSource};
use shared_types::{Hash, SystemTimeSource};

/// The Bid Ledger Service.
pub struct BidLedger<KV, TS, LS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    LS: LedgerSerializer,
{
    /// Key-value store holding the ledger document.
    pub(crate) kv_store: KV,
    /// Clock for insertion stamps.
    pub(crate) time_source: TS,
    /// Encoder for the ledger document.
    pub(crate) serializer: LS,
    /// Scope key and store path.
    pub(crate) config: LedgerConfig,
}

/// Dependencies for BidLedger
pub struct BidLedgerDependencies<KV, TS, LS> {
    /// Store that will hold the ledger document.
    pub kv_store: KV,
    /// Clock for insertion stamps.
    pub time_source: TS,
    /// Encoder for the ledger document.
    pub serializer: LS,
}

/// Ledger over the in-memory store.
pub type InMemoryBidLedger = BidLedger<InMemoryKVStore, SystemTimeSource, JsonLedgerSerializer>;

/// Ledger over the file-backed store.
pub type FileBidLedger = BidLedger<FileBackedKVStore, SystemTimeSource, JsonLedgerSerializer>;

impl InMemoryBidLedger {
    /// Ledger that lives only as long as this value.
    pub fn in_memory() -> Self {
        Self::new(
            BidLedgerDependencies {
                kv_store: InMemoryKVStore::new(),
                time_source: SystemTimeSource,
                serializer: JsonLedgerSerializer,
            },
            LedgerConfig::default(),
        )
    }
}

impl FileBidLedger {
    /// Ledger persisted at `config.store_path`.
    pub fn file_backed(config: LedgerConfig) -> Self {
        let kv_store = FileBackedKVStore::new(&config.store_path);
        Self::new(
            BidLedgerDependencies {
                kv_store,
                time_source: SystemTimeSource,
                serializer: JsonLedgerSerializer,
            },
            config,
        )
    }
}

impl<KV, TS, LS> BidLedger<KV, TS, LS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    LS: LedgerSerializer,
{
    /// Create a new ledger with the given dependencies.
    pub fn new(deps: BidLedgerDependencies<KV, TS, LS>, config: LedgerConfig) -> Self {
        #[cfg(feature = "tracing-log")]
        nns_telemetry::log_event!(
            debug,
            crate::LOG_SUBSYSTEM,
            "Bid ledger opened",
            scope_key = %config.scope_key
        );

        Self {
            kv_store: deps.kv_store,
            time_source: deps.time_source,
            serializer: deps.serializer,
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Consume the ledger, returning its store.
    pub fn into_store(self) -> KV {
        self.kv_store
    }

    /// Load every record, distinguishing an empty ledger from a corrupt one.
    ///
    /// The public read operations collapse `Corrupt` to an empty ledger;
    /// call this directly to surface it.
    pub fn load_records(&self) -> Result<Vec<BidRecord>, LedgerError> {
        let Some(bytes) = self.kv_store.get(self.scope())? else {
            return Ok(Vec::new());
        };
        self.serializer
            .deserialize(&bytes)
            .map_err(|e| LedgerError::Corrupt { reason: e.message })
    }

    fn scope(&self) -> &[u8] {
        self.config.scope_key.as_bytes()
    }

    fn read_or_empty(&self) -> Vec<BidRecord> {
        match self.load_records() {
            Ok(records) => records,
            Err(_e) => {
                #[cfg(feature = "tracing-log")]
                nns_telemetry::log_event!(
                    warn,
                    crate::LOG_SUBSYSTEM,
                    "Treating ledger as empty",
                    error = %_e
                );
                Vec::new()
            }
        }
    }

    /// Copy the undecodable document to `corrupt_key` so the next write
    /// does not destroy it. An older copy is replaced.
    fn preserve_corrupt(&mut self) -> Result<(), LedgerError> {
        let Some(bytes) = self.kv_store.get(self.scope())? else {
            return Ok(());
        };
        let backup = self.config.corrupt_key();
        self.kv_store.put(backup.as_bytes(), &bytes)?;

        #[cfg(feature = "tracing-log")]
        nns_telemetry::log_event!(
            warn,
            crate::LOG_SUBSYSTEM,
            "Preserved corrupt ledger document",
            backup_key = %backup,
            bytes = bytes.len()
        );
        Ok(())
    }

    fn write_records(&mut self, records: &[BidRecord]) -> Result<(), LedgerError> {
        let bytes = self
            .serializer
            .serialize(records)
            .map_err(LedgerError::Encoding)?;
        let key = self.config.scope_key.clone();
        self.kv_store.put(key.as_bytes(), &bytes)?;
        Ok(())
    }
}

impl<KV, TS, LS> BidLedgerApi for BidLedger<KV, TS, LS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    LS: LedgerSerializer,
{
    fn store(&mut self, record: BidRecord) -> Result<(), LedgerError> {
        let mut records = match self.load_records() {
            Ok(records) => records,
            Err(LedgerError::Corrupt { .. }) => {
                self.preserve_corrupt()?;
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        #[cfg(feature = "tracing-log")]
        nns_telemetry::log_bid_event!(
            info,
            crate::LOG_SUBSYSTEM,
            "Stored bid",
            record.auction_id,
            record.commitment
        );

        records.push(record);
        self.write_records(&records)
    }

    fn list_for(&self, auction_id: &str) -> Vec<BidRecord> {
        ledger::records_for(&self.read_or_empty(), auction_id)
    }

    fn highest_for(&self, auction_id: &str) -> Option<BidRecord> {
        ledger::highest_for(&self.read_or_empty(), auction_id)
    }

    fn remove(&mut self, commitment: &Hash) -> Result<usize, LedgerError> {
        let mut records = self.read_or_empty();
        let removed = ledger::remove_commitment(&mut records, commitment);
        if removed == 0 {
            return Ok(0);
        }

        #[cfg(feature = "tracing-log")]
        nns_telemetry::log_event!(
            info,
            crate::LOG_SUBSYSTEM,
            "Removed bid records",
            commitment = %commitment,
            removed = removed
        );

        self.write_records(&records)?;
        Ok(removed)
    }

    fn clear(&mut self) -> Result<(), LedgerError> {
        #[cfg(feature = "tracing-log")]
        nns_telemetry::log_event!(
            info,
            crate::LOG_SUBSYSTEM,
            "Cleared ledger",
            scope_key = %self.config.scope_key
        );

        let key = self.config.scope_key.clone();
        self.kv_store.delete(key.as_bytes())?;
        Ok(())
    }

    fn all(&self) -> Vec<BidRecord> {
        self.read_or_empty()
    }

    fn reconcile(&self, onchain: &[OnChainCommitment]) -> Vec<ReconciledCommitment> {
        ledger::reconcile(&self.read_or_empty(), onchain)
    }

    fn next_created_at(&self) -> CreatedAt {
        ledger::next_created_at(&self.read_or_empty(), self.time_source.now_millis())
    }
}
