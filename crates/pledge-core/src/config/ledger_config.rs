use serde::{Deserialize, Serialize};

use super::defaults;

/// What the ledger does when an append collides with a stored id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the append with `LedgerError::DuplicateId`; the ledger is unchanged.
    #[default]
    Reject,
    /// Replace the stored record and re-index it.
    Overwrite,
}

/// Ledger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub duplicate_policy: DuplicatePolicy,
    /// Upper bound on entries collected by a single thread-chain walk.
    pub max_thread_depth: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            max_thread_depth: defaults::DEFAULT_MAX_THREAD_DEPTH,
        }
    }
}
