//! Configuration for a ledger instance.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Ledger-wide configuration. The cooldown applies to both operation
/// classes (submission, decryption request) with independent per-actor
/// timestamps, and is owner-adjustable at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Minimum seconds between two operations of the same class by the
    /// same actor.
    pub cooldown_secs: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: constants::DEFAULT_COOLDOWN_SECS,
        }
    }
}

impl LedgerConfig {
    /// Cooldown as a signed chrono duration for timestamp arithmetic.
    #[must_use]
    pub fn cooldown(&self) -> chrono::Duration {
        chrono::Duration::seconds(i64::try_from(self.cooldown_secs).unwrap_or(i64::MAX))
    }
}
