//! Thread-chain trust score.
//!
//! For each entry at root-relative depth `d`:
//! `reliability(signer_domain) × exp(−d / depth_decay_divisor)`, summed.
//! A bonus for distinct signer domains is added, a penalty for hops with an
//! empty signature chain is subtracted, and the total is divided by the
//! chain length.

use std::collections::{HashMap, HashSet};

use pledge_core::config::ChainConfig;
use pledge_core::models::{ChainTermination, ThreadChain};
use pledge_core::ThreadEntry;
use pledge_ledger::LedgerState;
use tracing::{debug, warn};

/// Reliability in [0, 1] per signer domain.
pub type SignerReliability = HashMap<String, f64>;

#[derive(Debug, Clone, Default)]
pub struct ChainScorer {
    config: ChainConfig,
}

impl ChainScorer {
    pub fn new(config: ChainConfig) -> Self {
        Self { config }
    }

    /// Score the chain ending at `message_id`; 0.0 when it is unknown.
    ///
    /// A cyclic or depth-limited walk is scored over the entries collected.
    pub fn compute_chain_score(
        &self,
        state: &LedgerState,
        message_id: &str,
        signer_reliability: &SignerReliability,
    ) -> f64 {
        let chain = state.thread_chain(message_id);
        self.score_chain(&chain, signer_reliability)
    }

    pub fn score_chain(&self, chain: &ThreadChain, signer_reliability: &SignerReliability) -> f64 {
        match &chain.termination {
            ChainTermination::Cycle { message_id } => warn!(
                message_id = %message_id,
                len = chain.len(),
                "thread chain contains a cycle; scoring collected entries"
            ),
            ChainTermination::DepthLimit => warn!(
                len = chain.len(),
                "thread chain hit the depth limit; scoring collected entries"
            ),
            _ => {}
        }
        self.score_entries(&chain.entries, signer_reliability)
    }

    /// Score root-first `entries` directly.
    pub fn score_entries(&self, entries: &[ThreadEntry], signer_reliability: &SignerReliability) -> f64 {
        if entries.is_empty() {
            return 0.0;
        }

        let mut total = 0.0;
        let mut domains: HashSet<&str> = HashSet::new();
        let mut breaks = 0usize;

        for (depth, entry) in entries.iter().enumerate() {
            let domain = entry.signer_domain();
            domains.insert(domain);
            let reliability = signer_reliability
                .get(domain)
                .copied()
                .unwrap_or(self.config.default_reliability);
            let decay = (-(depth as f64) / self.config.depth_decay_divisor).exp();
            total += reliability * decay;
            if !entry.is_signed() {
                breaks += 1;
            }
        }

        let bonus = (domains.len() as f64 * self.config.diversity_bonus_per_domain)
            .min(self.config.max_diversity_bonus);
        let penalty =
            (breaks as f64 * self.config.break_penalty_per_gap).min(self.config.max_break_penalty);
        let raw = (total + bonus - penalty) / entries.len() as f64;
        let score = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) };

        debug!(
            len = entries.len(),
            distinct_domains = domains.len(),
            breaks,
            score,
            "chain score computed"
        );
        score
    }
}
