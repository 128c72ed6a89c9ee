//! Registration lifecycle of a won name.
//!
//! ```text
//!            now > expires_at                 now > expires_at + grace
//! [ACTIVE] ─────────────────→ [RENEWABLE] ─────────────────────────→ [EXPIRED]
//!     ↑                            │
//!     └────────── renew ───────────┘
//! ```
//!
//! A name the engine has released before `expires_at` is `Expired` at once:
//! renewal only opens after the term has actually run out.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Timestamp, U256};
use std::fmt;

/// Days a lapsed name stays renewable by its last registrant.
pub const GRACE_PERIOD_DAYS: u64 = 90;

/// Grace window in seconds.
pub const GRACE_PERIOD_SECS: u64 = GRACE_PERIOD_DAYS * 24 * 60 * 60;

/// Active names this close to expiry are flagged in listings.
pub const EXPIRY_WARNING_SECS: u64 = 30 * 24 * 60 * 60;

/// Registration data reported by the engine for a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainMeta {
    /// Start of the current term.
    pub registered_at: Timestamp,
    /// Last second of the current term.
    pub expires_at: Timestamp,
    /// Owner for the current term.
    pub registrant: Address,
    /// Winning bid that paid for the current term, in wei.
    pub last_bid_amount: U256,
    /// Engine-side flag; cleared when the name is released.
    pub active: bool,
}

impl DomainMeta {
    /// End of the renewal grace window.
    pub fn grace_ends_at(&self) -> Timestamp {
        self.expires_at.saturating_add(GRACE_PERIOD_SECS)
    }

    /// Active and within `EXPIRY_WARNING_SECS` of expiry.
    pub fn expiring_soon(&self, now: Timestamp) -> bool {
        registration_status(self, now) == RegistrationStatus::Active
            && self.expires_at.saturating_sub(now) < EXPIRY_WARNING_SECS
    }
}

/// Where a name sits in its registration lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationStatus {
    /// Owned and resolving.
    Active,
    /// Lapsed, but the registrant may still renew.
    Renewable,
    /// Not renewable: past the grace window, or released before expiry.
    Expired,
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "active",
            Self::Renewable => "renewable",
            Self::Expired => "expired",
        };
        f.write_str(label)
    }
}

/// Classify `meta` at `now`.
///
/// `Renewable` requires `now > expires_at`, whatever the `active` flag says.
pub fn registration_status(meta: &DomainMeta, now: Timestamp) -> RegistrationStatus {
    let lapsed = now > meta.expires_at;
    if meta.active && !lapsed {
        RegistrationStatus::Active
    } else if lapsed && now <= meta.grace_ends_at() {
        RegistrationStatus::Renewable
    } else {
        RegistrationStatus::Expired
    }
}
