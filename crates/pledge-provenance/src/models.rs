use chrono::{DateTime, Utc};
use pledge_core::events::{DeliveryEvent, DeliveryOutcome, PromiseEvent, RecourseEvent};
use pledge_core::models::ChainTermination;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromiseStatus {
    /// No delivery recorded yet.
    Pending,
    Completed,
}

/// Everything the ledger knows about one promise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PromiseProvenance {
    Found {
        promise: PromiseEvent,
        status: PromiseStatus,
        /// Outcome of the latest delivery.
        outcome: Option<DeliveryOutcome>,
        deliveries: Vec<DeliveryEvent>,
        recourses: Vec<RecourseEvent>,
    },
    NotFound {
        promise_id: String,
    },
}

impl PromiseProvenance {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn status(&self) -> Option<PromiseStatus> {
        match self {
            Self::Found { status, .. } => Some(*status),
            Self::NotFound { .. } => None,
        }
    }
}

/// Entry `position` does not reply to its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainGap {
    pub position: usize,
    pub expected: String,
    pub found: Option<String>,
}

/// Non-root entry with an empty signature chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureGap {
    pub position: usize,
    pub message_id: String,
}

/// Entry `position` is not strictly later than its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampIssue {
    pub position: usize,
    pub current: DateTime<Utc>,
    pub previous: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainVerification {
    pub message_id: String,
    pub found: bool,
    /// True only for a chain that reached its root with no issues.
    pub verified: bool,
    pub chain_length: usize,
    pub termination: ChainTermination,
    pub gaps: Vec<ChainGap>,
    pub signature_gaps: Vec<SignatureGap>,
    pub timestamp_issues: Vec<TimestampIssue>,
}

impl ChainVerification {
    pub fn total_issues(&self) -> usize {
        self.gaps.len() + self.signature_gaps.len() + self.timestamp_issues.len()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub delivered: usize,
    pub failed: usize,
    pub partial: usize,
    pub total: usize,
}

impl OutcomeCounts {
    pub fn record(&mut self, outcome: DeliveryOutcome) {
        match outcome {
            DeliveryOutcome::Delivered => self.delivered += 1,
            DeliveryOutcome::Failed => self.failed += 1,
            DeliveryOutcome::Partial => self.partial += 1,
        }
        self.total += 1;
    }
}

/// Summary of an agent's activity over a window ending at `period_end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStatistics {
    pub agent_id: String,
    pub window_days: i64,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub total_promises: usize,
    pub promises_with_delivery: usize,
    pub promises_with_recourse: usize,
    pub deliveries: OutcomeCounts,
    pub total_recourses: usize,
    /// `delivered / deliveries.total`, 0 when there are no deliveries.
    pub delivery_rate: f64,
}
