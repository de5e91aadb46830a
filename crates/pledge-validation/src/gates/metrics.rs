use pledge_core::models::{TrustSnapshot, ValidationIssue};

use crate::codes;

/// Range checks for computed scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsGate;

impl MetricsGate {
    pub fn validate_range(&self, value: f64, min: f64, max: f64, field: &str) -> Vec<ValidationIssue> {
        if !value.is_finite() {
            return vec![ValidationIssue::error(codes::METRIC_NOT_FINITE, format!("{field} is not a finite number"))
                .at(field)
                .with_value(value.to_string())];
        }
        if value < min {
            return vec![ValidationIssue::error(codes::METRIC_TOO_LOW, format!("{field} is below {min}"))
                .at(field)
                .with_value(value)];
        }
        if value > max {
            return vec![ValidationIssue::error(codes::METRIC_TOO_HIGH, format!("{field} is above {max}"))
                .at(field)
                .with_value(value)];
        }
        Vec::new()
    }

    /// Every computed score of a snapshot must lie in [0, 1].
    pub fn validate_snapshot(&self, snapshot: &TrustSnapshot) -> Vec<ValidationIssue> {
        snapshot
            .scores()
            .flat_map(|(field, value)| self.validate_range(value, 0.0, 1.0, field))
            .collect()
    }
}
