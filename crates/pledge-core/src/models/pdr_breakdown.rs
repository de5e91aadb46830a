use serde::{Deserialize, Serialize};

/// Per-outcome tallies behind a PDR value.
///
/// `failed` includes promises with no delivery at all; `undelivered` counts
/// those separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdrBreakdown {
    pub total_promises: usize,
    pub delivered: usize,
    pub partial: usize,
    pub failed: usize,
    pub undelivered: usize,
    pub with_recourse: usize,
    pub numerator: f64,
    pub normalizer: f64,
    pub pdr: f64,
}
