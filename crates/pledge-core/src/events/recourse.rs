use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_record_id, Metadata, RecordKind};

/// A remediation record tied to a promise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecourseEvent {
    pub id: String,
    /// Soft reference; the ledger does not check that the promise exists.
    pub promise_id: String,
    pub action: String,
    pub resolution: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl RecourseEvent {
    pub fn new(
        promise_id: impl Into<String>,
        action: impl Into<String>,
        resolution: impl Into<String>,
    ) -> Self {
        Self {
            id: new_record_id(RecordKind::Recourse),
            promise_id: promise_id.into(),
            action: action.into(),
            resolution: resolution.into(),
            timestamp: Utc::now(),
            metadata: Metadata::new(),
        }
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}
