use serde::{Deserialize, Serialize};

use super::defaults;

/// Hygiene gate thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Timestamps older than this many days raise a warning.
    pub max_past_days: i64,
    /// Timestamps further ahead than this many days are rejected.
    pub max_future_days: i64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_past_days: defaults::DEFAULT_MAX_PAST_DAYS,
            max_future_days: defaults::DEFAULT_MAX_FUTURE_DAYS,
        }
    }
}
