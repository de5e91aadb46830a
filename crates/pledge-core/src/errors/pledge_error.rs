use super::{ConfigError, LedgerError};

/// Result alias used across every Pledge crate.
pub type PledgeResult<T> = Result<T, PledgeError>;

/// Top-level error for the Pledge trust ledger.
///
/// Scorers never return this for "no data" conditions; those resolve to
/// documented fallback constants. Errors here are genuine faults: rejected
/// appends, poisoned locks, bad configuration, or serialization failures.
#[derive(Debug, thiserror::Error)]
pub enum PledgeError {
    #[error("ledger error: {0}")]
    LedgerError(#[from] LedgerError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("event rejected by hygiene gates: {id} ({issue_count} blocking issues)")]
    ValidationRejected { id: String, issue_count: usize },
}
