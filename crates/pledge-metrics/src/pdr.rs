//! Promise-Delivery-Rate.
//!
//! For each of the agent's promises in `[start, end]`:
//!
//! ```text
//! weighted   = outcome × decay × impact × (1 − recourse_weight × (1 − outcome))
//! normalizer = impact × decay
//! PDR        = Σ weighted / Σ normalizer
//! ```
//!
//! `outcome` comes from the latest delivery (delivered 1.0, partial 0.5,
//! failed 0.0, none 0.0). `recourse_weight` is `recourse_weight_factor` when
//! any recourse exists for the promise. Recourse only dampens the shortfall
//! `1 − outcome`, so it never changes a delivered promise's contribution.

use chrono::{DateTime, Utc};
use pledge_core::config::PdrConfig;
use pledge_core::models::PdrBreakdown;
use pledge_core::DeliveryOutcome;
use pledge_decay::DecayFunction;
use pledge_ledger::LedgerState;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PdrScorer {
    config: PdrConfig,
    decay: DecayFunction,
}

impl Default for PdrScorer {
    fn default() -> Self {
        Self::new(PdrConfig::default())
    }
}

impl PdrScorer {
    pub fn new(config: PdrConfig) -> Self {
        let decay = DecayFunction::from_config(&config);
        Self { config, decay }
    }

    pub fn config(&self) -> &PdrConfig {
        &self.config
    }

    /// PDR in [0, 1]; 0.0 when the agent has no promises in the window.
    pub fn compute_pdr(
        &self,
        state: &LedgerState,
        agent_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> f64 {
        self.compute_breakdown(state, agent_id, start, end).pdr
    }

    pub fn compute_breakdown(
        &self,
        state: &LedgerState,
        agent_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> PdrBreakdown {
        let promises = state.agent_promises_in_range(agent_id, start, end);
        let mut breakdown = PdrBreakdown {
            total_promises: promises.len(),
            ..Default::default()
        };
        if promises.is_empty() {
            return breakdown;
        }

        for promise in promises {
            let impact = self.config.impact_weight(promise.impact_tier);
            let decay = self.decay.weight_at(promise.timestamp, end);

            let outcome = match state.latest_delivery(&promise.id) {
                None => {
                    breakdown.failed += 1;
                    breakdown.undelivered += 1;
                    0.0
                }
                Some(delivery) => {
                    match delivery.outcome {
                        DeliveryOutcome::Delivered => breakdown.delivered += 1,
                        DeliveryOutcome::Partial => breakdown.partial += 1,
                        DeliveryOutcome::Failed => breakdown.failed += 1,
                    }
                    delivery.outcome.score()
                }
            };

            let recourse_weight = if state.has_recourse(&promise.id) {
                breakdown.with_recourse += 1;
                self.config.recourse_weight_factor
            } else {
                0.0
            };

            breakdown.numerator +=
                outcome * decay * impact * (1.0 - recourse_weight * (1.0 - outcome));
            breakdown.normalizer += impact * decay;
        }

        breakdown.pdr = if breakdown.normalizer > 0.0 {
            (breakdown.numerator / breakdown.normalizer).clamp(0.0, 1.0)
        } else {
            0.0
        };

        debug!(
            agent_id,
            total = breakdown.total_promises,
            delivered = breakdown.delivered,
            failed = breakdown.failed,
            pdr = breakdown.pdr,
            "pdr computed"
        );
        breakdown
    }
}
