use chrono::{DateTime, Utc};
use pledge_core::config::{DecayCurve, PdrConfig};
use pledge_core::constants::SECONDS_PER_DAY;

use crate::formula;

/// A configured decay curve with a fixed horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayFunction {
    curve: DecayCurve,
    max_age_days: f64,
}

impl DecayFunction {
    pub fn new(curve: DecayCurve, max_age_days: f64) -> Self {
        Self {
            curve,
            max_age_days,
        }
    }

    /// Curve and horizon taken from the PDR config.
    pub fn from_config(config: &PdrConfig) -> Self {
        Self::new(config.decay_curve, config.decay_period_days)
    }

    /// Build from a curve name; unknown names fall back to linear.
    pub fn from_name(curve: &str, max_age_days: f64) -> Self {
        Self::new(DecayCurve::parse(curve), max_age_days)
    }

    pub fn curve(&self) -> DecayCurve {
        self.curve
    }

    pub fn max_age_days(&self) -> f64 {
        self.max_age_days
    }

    pub fn weight(&self, age_days: f64) -> f64 {
        formula::decay_weight(age_days, self.max_age_days, self.curve)
    }

    /// Weight of an event stamped `timestamp` as seen from `reference`.
    pub fn weight_at(&self, timestamp: DateTime<Utc>, reference: DateTime<Utc>) -> f64 {
        self.weight(age_in_days(timestamp, reference))
    }
}

/// Fractional days from `timestamp` to `reference` (negative if in the future).
pub fn age_in_days(timestamp: DateTime<Utc>, reference: DateTime<Utc>) -> f64 {
    let delta = reference - timestamp;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0 / SECONDS_PER_DAY,
        None => delta.num_seconds() as f64 / SECONDS_PER_DAY,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn age_is_fractional() {
        let t0 = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let age = age_in_days(t0, t0 + Duration::hours(36));
        assert!((age - 1.5).abs() < 1e-12);
    }

    #[test]
    fn future_timestamps_weigh_one() {
        let f = DecayFunction::new(DecayCurve::Exponential, 90.0);
        let now = Utc::now();
        assert_eq!(f.weight_at(now + Duration::days(2), now), 1.0);
    }

    #[test]
    fn unknown_name_is_linear() {
        let f = DecayFunction::from_name("cosine", 10.0);
        assert_eq!(f.curve(), DecayCurve::Linear);
        assert!((f.weight(5.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn from_config_uses_pdr_defaults() {
        let f = DecayFunction::from_config(&PdrConfig::default());
        assert_eq!(f.curve(), DecayCurve::Exponential);
        assert_eq!(f.max_age_days(), 90.0);
    }
}
