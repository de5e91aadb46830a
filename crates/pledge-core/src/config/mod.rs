//! Workspace configuration.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`PLEDGE_*`)
//! 2. TOML file
//! 3. Compiled defaults (`defaults.rs`)

mod chain_config;
pub mod defaults;
mod ledger_config;
mod observability_config;
mod pdr_config;
mod validation_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use chain_config::ChainConfig;
pub use ledger_config::{DuplicatePolicy, LedgerConfig};
pub use observability_config::ObservabilityConfig;
pub use pdr_config::{DecayCurve, PdrConfig};
pub use validation_config::ValidationConfig;

use crate::errors::ConfigError;

pub const ENV_DECAY_CURVE: &str = "PLEDGE_DECAY_CURVE";
pub const ENV_DECAY_PERIOD_DAYS: &str = "PLEDGE_DECAY_PERIOD_DAYS";
pub const ENV_LOG: &str = "PLEDGE_LOG";

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PledgeConfig {
    pub ledger: LedgerConfig,
    pub pdr: PdrConfig,
    pub chain: ChainConfig,
    pub validation: ValidationConfig,
    pub observability: ObservabilityConfig,
}

impl PledgeConfig {
    /// Load from a TOML file, apply environment overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse from a TOML string. Missing sections fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `PLEDGE_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup. Unparseable values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_DECAY_CURVE) {
            self.pdr.decay_curve = DecayCurve::parse(&val);
        }
        if let Some(val) = lookup(ENV_DECAY_PERIOD_DAYS) {
            if let Ok(v) = val.trim().parse::<f64>() {
                self.pdr.decay_period_days = v;
            }
        }
        if let Some(val) = lookup(ENV_LOG) {
            if !val.trim().is_empty() {
                self.observability.log_level = val.trim().to_string();
            }
        }
    }

    /// Range-check every numeric knob.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pdr.decay_period_days.is_finite() && self.pdr.decay_period_days > 0.0) {
            return Err(invalid("pdr.decay_period_days", "must be a finite value greater than 0"));
        }
        check_unit("pdr.recourse_weight_factor", self.pdr.recourse_weight_factor)?;
        check_unit("pdr.unknown_tier_weight", self.pdr.unknown_tier_weight)?;
        for (tier, weight) in &self.pdr.impact_weights {
            check_unit(&format!("pdr.impact_weights.{tier}"), *weight)?;
        }

        check_unit("chain.default_reliability", self.chain.default_reliability)?;
        if !(self.chain.depth_decay_divisor.is_finite() && self.chain.depth_decay_divisor > 0.0) {
            return Err(invalid("chain.depth_decay_divisor", "must be a finite value greater than 0"));
        }
        check_non_negative("chain.diversity_bonus_per_domain", self.chain.diversity_bonus_per_domain)?;
        check_non_negative("chain.max_diversity_bonus", self.chain.max_diversity_bonus)?;
        check_non_negative("chain.break_penalty_per_gap", self.chain.break_penalty_per_gap)?;
        check_non_negative("chain.max_break_penalty", self.chain.max_break_penalty)?;

        if self.ledger.max_thread_depth == 0 {
            return Err(invalid("ledger.max_thread_depth", "must be greater than 0"));
        }
        if self.validation.max_past_days < 0 {
            return Err(invalid("validation.max_past_days", "must not be negative"));
        }
        if self.validation.max_future_days < 0 {
            return Err(invalid("validation.max_future_days", "must not be negative"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn check_unit(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, "must be between 0.0 and 1.0"))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be a finite, non-negative value"))
    }
}
