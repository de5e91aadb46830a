use chrono::{DateTime, Duration, Utc};
use pledge_core::config::ValidationConfig;
use pledge_core::models::ValidationIssue;

use crate::codes;

/// Plausibility window and ordering checks for timestamps.
#[derive(Debug, Clone)]
pub struct TimestampGate {
    max_past: Duration,
    max_future: Duration,
}

impl Default for TimestampGate {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl TimestampGate {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            max_past: Duration::try_days(config.max_past_days).unwrap_or(Duration::MAX),
            max_future: Duration::try_days(config.max_future_days).unwrap_or(Duration::MAX),
        }
    }

    /// Old timestamps warn; far-future timestamps are errors.
    pub fn validate_at(
        &self,
        timestamp: DateTime<Utc>,
        now: DateTime<Utc>,
        location: &str,
    ) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if now.signed_duration_since(timestamp) > self.max_past {
            issues.push(
                ValidationIssue::warning(
                    codes::TIMESTAMP_TOO_OLD,
                    "timestamp is older than the plausibility window",
                )
                .at(location)
                .with_value(timestamp.to_rfc3339()),
            );
        }
        if timestamp.signed_duration_since(now) > self.max_future {
            issues.push(
                ValidationIssue::error(
                    codes::TIMESTAMP_FUTURE,
                    "timestamp is too far in the future",
                )
                .at(location)
                .with_value(timestamp.to_rfc3339()),
            );
        }
        issues
    }

    pub fn validate(&self, timestamp: DateTime<Utc>, location: &str) -> Vec<ValidationIssue> {
        self.validate_at(timestamp, Utc::now(), location)
    }

    /// `earlier` must not come after `later`.
    pub fn validate_order(
        &self,
        earlier: DateTime<Utc>,
        later: DateTime<Utc>,
        field_earlier: &str,
        field_later: &str,
    ) -> Vec<ValidationIssue> {
        if earlier <= later {
            return Vec::new();
        }
        vec![ValidationIssue::error(
            codes::TIMESTAMP_ORDER,
            format!("{field_earlier} must be before {field_later}"),
        )
        .at(format!("{field_earlier},{field_later}"))
        .with_value(format!("{} > {}", earlier.to_rfc3339(), later.to_rfc3339()))]
    }
}
