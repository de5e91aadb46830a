use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Merged output of one metrics computation.
///
/// Uncomputed fields serialize as `null`; nothing is omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrustSnapshot {
    pub pdr: Option<f64>,
    pub dependency_impact: Option<f64>,
    pub mdr: Option<f64>,
    pub recovery_score: Option<f64>,
    /// Only present when a thread message id was supplied.
    pub chain_score: Option<f64>,
    pub computed_at: Option<DateTime<Utc>>,
}

impl TrustSnapshot {
    /// Iterate `(field name, value)` for every computed score.
    pub fn scores(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        [
            ("pdr", self.pdr),
            ("dependency_impact", self.dependency_impact),
            ("mdr", self.mdr),
            ("recovery_score", self.recovery_score),
            ("chain_score", self.chain_score),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}
