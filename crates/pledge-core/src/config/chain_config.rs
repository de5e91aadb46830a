use serde::{Deserialize, Serialize};

use super::defaults;

/// Thread-chain scoring parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Reliability assumed for a signer domain missing from the reliability map.
    pub default_reliability: f64,
    /// Depth decay is `exp(-depth / depth_decay_divisor)`.
    pub depth_decay_divisor: f64,
    pub diversity_bonus_per_domain: f64,
    pub max_diversity_bonus: f64,
    /// Penalty per hop with an empty signature chain.
    pub break_penalty_per_gap: f64,
    pub max_break_penalty: f64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            default_reliability: defaults::DEFAULT_SIGNER_RELIABILITY,
            depth_decay_divisor: defaults::DEFAULT_DEPTH_DECAY_DIVISOR,
            diversity_bonus_per_domain: defaults::DEFAULT_DIVERSITY_BONUS_PER_DOMAIN,
            max_diversity_bonus: defaults::DEFAULT_MAX_DIVERSITY_BONUS,
            break_penalty_per_gap: defaults::DEFAULT_BREAK_PENALTY_PER_GAP,
            max_break_penalty: defaults::DEFAULT_MAX_BREAK_PENALTY,
        }
    }
}
