//! Memory-distortion rate and recovery.
//!
//! `mdr = distortions / interactions`, where interactions are the promises
//! recorded in the window (or the distortion count when there are none).
//! `recovery = (corrected + partially_corrected) / distortions`.

use chrono::{DateTime, Utc};
use pledge_core::models::MemoryScore;
use pledge_ledger::LedgerState;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryScorer;

impl MemoryScorer {
    pub fn new() -> Self {
        Self
    }

    /// `(0.0, 0.0)` when no distortions fall in the window.
    pub fn compute_mdr(
        &self,
        state: &LedgerState,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> MemoryScore {
        let distortions = state.memory_distortions_in_range(start, end);
        if distortions.is_empty() {
            return MemoryScore::default();
        }

        let count = distortions.len();
        let interactions = match state.count_promises_in_range(start, end) {
            0 => count,
            n => n,
        };
        let recovered = distortions
            .iter()
            .filter(|d| d.correction_status.is_recovered())
            .count();

        let score = MemoryScore {
            mdr: (count as f64 / interactions as f64).clamp(0.0, 1.0),
            recovery: (recovered as f64 / count as f64).clamp(0.0, 1.0),
        };
        debug!(
            distortions = count,
            interactions,
            mdr = score.mdr,
            recovery = score.recovery,
            "memory distortion computed"
        );
        score
    }
}
