use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_record_id, Metadata, RecordKind};

/// Kinds of memory distortion an agent can exhibit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistortionType {
    Hallucination,
    Confabulation,
    TemporalDrift,
    AttributeMixup,
    ContextLoss,
}

/// Whether and how a distortion was corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionStatus {
    Uncorrected,
    Corrected,
    PartiallyCorrected,
}

impl CorrectionStatus {
    /// Partial corrections count toward recovery.
    pub fn is_recovered(self) -> bool {
        matches!(self, Self::Corrected | Self::PartiallyCorrected)
    }
}

/// A detected false-memory incident within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryDistortionEvent {
    pub id: String,
    pub session_id: String,
    pub distortion_type: DistortionType,
    pub correction_status: CorrectionStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl MemoryDistortionEvent {
    pub fn new(
        session_id: impl Into<String>,
        distortion_type: DistortionType,
        correction_status: CorrectionStatus,
    ) -> Self {
        Self {
            id: new_record_id(RecordKind::MemoryDistortion),
            session_id: session_id.into(),
            distortion_type,
            correction_status,
            timestamp: Utc::now(),
            metadata: Metadata::new(),
        }
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
