use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_record_id, Metadata, RecordKind};

/// Outcome of an attempt to fulfill a promise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Delivered,
    Failed,
    Partial,
}

impl DeliveryOutcome {
    /// Score contributed to PDR: delivered 1.0, partial 0.5, failed 0.0.
    pub fn score(self) -> f64 {
        match self {
            Self::Delivered => 1.0,
            Self::Partial => 0.5,
            Self::Failed => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Failed => "failed",
            Self::Partial => "partial",
        }
    }
}

/// Delivered/expected amounts attached to a delivery.
///
/// Partial deliveries must be `Complete`; the hygiene gates reject
/// `Incomplete` partials before they reach the ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeliveryAmounts {
    Complete { delivered: f64, expected: f64 },
    Incomplete {
        delivered: Option<f64>,
        expected: Option<f64>,
    },
}

impl DeliveryAmounts {
    pub fn from_parts(delivered: Option<f64>, expected: Option<f64>) -> Self {
        match (delivered, expected) {
            (Some(delivered), Some(expected)) => Self::Complete {
                delivered,
                expected,
            },
            (delivered, expected) => Self::Incomplete {
                delivered,
                expected,
            },
        }
    }

    pub fn delivered(&self) -> Option<f64> {
        match *self {
            Self::Complete { delivered, .. } => Some(delivered),
            Self::Incomplete { delivered, .. } => delivered,
        }
    }

    pub fn expected(&self) -> Option<f64> {
        match *self {
            Self::Complete { expected, .. } => Some(expected),
            Self::Incomplete { expected, .. } => expected,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// `delivered / expected` for complete amounts with a positive expectation.
    pub fn fraction(&self) -> Option<f64> {
        match *self {
            Self::Complete {
                delivered,
                expected,
            } if expected > 0.0 => Some(delivered / expected),
            _ => None,
        }
    }
}

impl Default for DeliveryAmounts {
    fn default() -> Self {
        Self::Incomplete {
            delivered: None,
            expected: None,
        }
    }
}

/// Recorded outcome of a promise.
///
/// Serialized with flat, nullable `delivered_amount` / `expected_amount` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DeliveryRecord", into = "DeliveryRecord")]
pub struct DeliveryEvent {
    pub id: String,
    /// Soft reference; checked by the consistency pass, not at insert time.
    pub promise_id: String,
    pub outcome: DeliveryOutcome,
    pub amounts: DeliveryAmounts,
    pub timestamp: DateTime<Utc>,
    pub metadata: Metadata,
}

impl DeliveryEvent {
    pub fn new(promise_id: impl Into<String>, outcome: DeliveryOutcome) -> Self {
        Self {
            id: new_record_id(RecordKind::Delivery),
            promise_id: promise_id.into(),
            outcome,
            amounts: DeliveryAmounts::default(),
            timestamp: Utc::now(),
            metadata: Metadata::new(),
        }
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_amounts(mut self, delivered: f64, expected: f64) -> Self {
        self.amounts = DeliveryAmounts::Complete {
            delivered,
            expected,
        };
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Wire shape of a delivery.
#[derive(Serialize, Deserialize)]
struct DeliveryRecord {
    id: String,
    promise_id: String,
    outcome: DeliveryOutcome,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    delivered_amount: Option<f64>,
    #[serde(default)]
    expected_amount: Option<f64>,
    #[serde(default)]
    metadata: Metadata,
}

impl From<DeliveryRecord> for DeliveryEvent {
    fn from(r: DeliveryRecord) -> Self {
        Self {
            id: r.id,
            promise_id: r.promise_id,
            outcome: r.outcome,
            amounts: DeliveryAmounts::from_parts(r.delivered_amount, r.expected_amount),
            timestamp: r.timestamp,
            metadata: r.metadata,
        }
    }
}

impl From<DeliveryEvent> for DeliveryRecord {
    fn from(e: DeliveryEvent) -> Self {
        Self {
            delivered_amount: e.amounts.delivered(),
            expected_amount: e.amounts.expected(),
            id: e.id,
            promise_id: e.promise_id,
            outcome: e.outcome,
            timestamp: e.timestamp,
            metadata: e.metadata,
        }
    }
}
