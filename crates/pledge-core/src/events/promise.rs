use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_record_id, Metadata, RecordKind};

/// Criticality classification of a promise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactTier {
    Critical,
    High,
    Medium,
    Low,
}

impl ImpactTier {
    pub const ALL: [ImpactTier; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A commitment made by an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromiseEvent {
    pub id: String,
    /// DID or other stable identifier of the promising agent.
    pub agent_id: String,
    pub promise_text: String,
    pub impact_tier: ImpactTier,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl PromiseEvent {
    /// Create a promise stamped with the current time and a fresh id.
    pub fn new(
        agent_id: impl Into<String>,
        promise_text: impl Into<String>,
        impact_tier: ImpactTier,
    ) -> Self {
        Self {
            id: new_record_id(RecordKind::Promise),
            agent_id: agent_id.into(),
            promise_text: promise_text.into(),
            impact_tier,
            timestamp: Utc::now(),
            metadata: Metadata::new(),
        }
    }

    /// Override the creation timestamp (backfilled or replayed events).
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}
