use std::collections::HashMap;

use pledge_core::config::{
    DecayCurve, DuplicatePolicy, PledgeConfig, ENV_DECAY_CURVE, ENV_DECAY_PERIOD_DAYS, ENV_LOG,
};
use pledge_core::errors::ConfigError;
use pledge_core::ImpactTier;

#[test]
fn defaults_are_valid() {
    let config = PledgeConfig::default();
    config.validate().unwrap();
    assert_eq!(config.ledger.duplicate_policy, DuplicatePolicy::Reject);
    assert_eq!(config.ledger.max_thread_depth, 10_000);
    assert_eq!(config.pdr.decay_curve, DecayCurve::Exponential);
    assert_eq!(config.pdr.decay_period_days, 90.0);
    assert_eq!(config.pdr.recourse_weight_factor, 0.5);
    assert_eq!(config.chain.default_reliability, 0.5);
    assert_eq!(config.validation.max_future_days, 365);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn default_tier_weights() {
    let pdr = PledgeConfig::default().pdr;
    assert_eq!(pdr.impact_weight(ImpactTier::Critical), 1.0);
    assert_eq!(pdr.impact_weight(ImpactTier::High), 0.8);
    assert_eq!(pdr.impact_weight(ImpactTier::Medium), 0.5);
    assert_eq!(pdr.impact_weight(ImpactTier::Low), 0.2);
}

#[test]
fn tier_missing_from_map_uses_fallback_weight() {
    let mut pdr = PledgeConfig::default().pdr;
    pdr.impact_weights.remove("critical");
    assert_eq!(pdr.impact_weight(ImpactTier::Critical), 0.5);
}

#[test]
fn partial_toml_keeps_defaults() {
    let config = PledgeConfig::from_toml(
        r#"
        [pdr]
        decay_curve = "logarithmic"

        [ledger]
        duplicate_policy = "overwrite"
        "#,
    )
    .unwrap();
    assert_eq!(config.pdr.decay_curve, DecayCurve::Logarithmic);
    assert_eq!(config.pdr.decay_period_days, 90.0);
    assert_eq!(config.ledger.duplicate_policy, DuplicatePolicy::Overwrite);
    assert_eq!(config.chain.depth_decay_divisor, 2.0);
}

#[test]
fn unknown_curve_name_is_linear() {
    let config = PledgeConfig::from_toml("[pdr]\ndecay_curve = \"sigmoid\"\n").unwrap();
    assert_eq!(config.pdr.decay_curve, DecayCurve::Linear);
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = PledgeConfig::from_toml("[pdr\ndecay_curve = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn out_of_range_weight_fails_validation() {
    let config = PledgeConfig::from_toml("[pdr.impact_weights]\nhigh = 1.5\n").unwrap();
    match config.validate().unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "pdr.impact_weights.high"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_decay_period_fails_validation() {
    let mut config = PledgeConfig::default();
    config.pdr.decay_period_days = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn env_overrides_apply() {
    let env: HashMap<&str, &str> = [
        (ENV_DECAY_CURVE, "linear"),
        (ENV_DECAY_PERIOD_DAYS, "30"),
        (ENV_LOG, "debug"),
    ]
    .into_iter()
    .collect();

    let mut config = PledgeConfig::default();
    config.apply_overrides_from(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.pdr.decay_curve, DecayCurve::Linear);
    assert_eq!(config.pdr.decay_period_days, 30.0);
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn unparseable_env_override_is_ignored() {
    let mut config = PledgeConfig::default();
    config.apply_overrides_from(|key| (key == ENV_DECAY_PERIOD_DAYS).then(|| "soon".to_string()));
    assert_eq!(config.pdr.decay_period_days, 90.0);
}

#[test]
fn load_missing_file_is_io_error() {
    let err = PledgeConfig::load(std::path::Path::new("/nonexistent/pledge.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::IoError { .. }));
}
