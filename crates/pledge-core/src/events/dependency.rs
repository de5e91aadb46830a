use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_record_id, Metadata, RecordKind};

/// Exposure of a workflow to a (possibly flaky) dependency.
///
/// All three numeric fields are expected in [0.0, 1.0]; the hygiene gates
/// flag values outside that range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyEvent {
    pub id: String,
    pub workflow_id: String,
    pub dependency_id: String,
    /// How much the workflow matters to the overall system.
    pub workflow_weight: f64,
    /// Historical failure rate of the dependency.
    pub failure_rate: f64,
    /// Quality of fallback alternatives.
    pub fallback_score: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl DependencyEvent {
    pub fn new(
        workflow_id: impl Into<String>,
        dependency_id: impl Into<String>,
        workflow_weight: f64,
        failure_rate: f64,
        fallback_score: f64,
    ) -> Self {
        Self {
            id: new_record_id(RecordKind::Dependency),
            workflow_id: workflow_id.into(),
            dependency_id: dependency_id.into(),
            workflow_weight,
            failure_rate,
            fallback_score,
            timestamp: Utc::now(),
            metadata: Metadata::new(),
        }
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Blast radius of this dependency: `weight × failure_rate × (1 − fallback)`.
    pub fn impact(&self) -> f64 {
        self.workflow_weight * self.failure_rate * (1.0 - self.fallback_score)
    }
}
