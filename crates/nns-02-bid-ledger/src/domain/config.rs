//! # Ledger Configuration

use std::env;
use std::path::PathBuf;

/// Default key the ledger document lives under.
pub const DEFAULT_SCOPE_KEY: &str = "nns_bids";

/// Default location of the file-backed store.
pub const DEFAULT_STORE_PATH: &str = "./data/nns-bids.db";

/// Configuration for the Bid Ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Key of the ledger document inside the store.
    ///
    /// One installation, one scope: two ledgers sharing a store but using
    /// different keys never see each other's bids.
    pub scope_key: String,

    /// Path of the file-backed store.
    pub store_path: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            scope_key: DEFAULT_SCOPE_KEY.to_string(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl LedgerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `NNS_LEDGER_SCOPE`: Scope key (default: nns_bids)
    /// - `NNS_LEDGER_PATH`: Store file (default: ./data/nns-bids.db)
    pub fn from_env() -> Self {
        Self {
            scope_key: env::var("NNS_LEDGER_SCOPE")
                .unwrap_or_else(|_| DEFAULT_SCOPE_KEY.to_string()),
            store_path: env::var("NNS_LEDGER_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH)),
        }
    }

    /// Override the store path.
    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Key holding the last undecodable document the ledger wrote over.
    pub fn corrupt_key(&self) -> String {
        format!("{}.corrupt", self.scope_key)
    }

    /// Override the scope key.
    #[must_use]
    pub fn with_scope_key(mut self, key: impl Into<String>) -> Self {
        self.scope_key = key.into();
        self
    }
}
