use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::events::ImpactTier;

/// Shape of the age-to-weight decay curve.
///
/// Parsing is lenient: any unrecognized name maps to `Linear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DecayCurve {
    Linear,
    #[default]
    Exponential,
    Logarithmic,
}

impl DecayCurve {
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "exponential" => Self::Exponential,
            "logarithmic" => Self::Logarithmic,
            _ => Self::Linear,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Exponential => "exponential",
            Self::Logarithmic => "logarithmic",
        }
    }
}

impl fmt::Display for DecayCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DecayCurve {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<DecayCurve> for String {
    fn from(c: DecayCurve) -> Self {
        c.as_str().to_string()
    }
}

/// Promise-Delivery-Rate parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdrConfig {
    pub decay_curve: DecayCurve,
    /// Age (days) at which a promise stops contributing.
    pub decay_period_days: f64,
    /// Weight per impact tier name.
    pub impact_weights: BTreeMap<String, f64>,
    /// How much recourse dampens the penalty on a non-delivered promise.
    pub recourse_weight_factor: f64,
    /// Weight used for a tier missing from `impact_weights`.
    pub unknown_tier_weight: f64,
}

impl PdrConfig {
    pub fn impact_weight(&self, tier: ImpactTier) -> f64 {
        self.impact_weights
            .get(tier.as_str())
            .copied()
            .unwrap_or(self.unknown_tier_weight)
    }
}

impl Default for PdrConfig {
    fn default() -> Self {
        let impact_weights = [
            (ImpactTier::Critical, defaults::DEFAULT_CRITICAL_WEIGHT),
            (ImpactTier::High, defaults::DEFAULT_HIGH_WEIGHT),
            (ImpactTier::Medium, defaults::DEFAULT_MEDIUM_WEIGHT),
            (ImpactTier::Low, defaults::DEFAULT_LOW_WEIGHT),
        ]
        .into_iter()
        .map(|(tier, weight)| (tier.as_str().to_string(), weight))
        .collect();

        Self {
            decay_curve: DecayCurve::default(),
            decay_period_days: defaults::DEFAULT_DECAY_PERIOD_DAYS,
            impact_weights,
            recourse_weight_factor: defaults::DEFAULT_RECOURSE_WEIGHT_FACTOR,
            unknown_tier_weight: defaults::DEFAULT_UNKNOWN_TIER_WEIGHT,
        }
    }
}
