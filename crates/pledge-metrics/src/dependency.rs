//! Dependency Impact: expected blast radius of dependency failures.
//!
//! ```text
//! impact = workflow_weight × failure_rate × (1 − fallback_score)
//! DI     = Σ impact / Σ workflow_weight
//! ```
//!
//! # Examples
//!
//! `(0.8, 0.2, 0.9)` and `(0.6, 0.5, 0.1)` give
//! `(0.016 + 0.27) / 1.4 ≈ 0.204`.

use chrono::{DateTime, Utc};
use pledge_ledger::LedgerState;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyImpactScorer;

impl DependencyImpactScorer {
    pub fn new() -> Self {
        Self
    }

    /// DI in [0, 1]; 0.0 with no dependencies or zero total weight.
    pub fn compute_di(&self, state: &LedgerState, start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
        let deps = state.dependencies_in_range(start, end);
        if deps.is_empty() {
            return 0.0;
        }

        let (impact, weight) = deps.iter().fold((0.0, 0.0), |(i, w), d| {
            (i + d.impact(), w + d.workflow_weight)
        });
        let di = if weight > 0.0 {
            (impact / weight).clamp(0.0, 1.0)
        } else {
            0.0
        };

        debug!(dependencies = deps.len(), di, "dependency impact computed");
        di
    }
}
