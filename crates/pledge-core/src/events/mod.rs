//! Trust event model.
//!
//! Five closed event kinds share an id, a UTC creation timestamp, and an open
//! metadata map. Routing over kinds is always an explicit `match` on [`Event`].
//!
//! # Examples
//!
//! ```
//! use pledge_core::events::{Event, ImpactTier, PromiseEvent, RecordKind};
//!
//! let promise = PromiseEvent::new("did:agent:alpha", "ship the report", ImpactTier::High);
//! assert!(promise.id.starts_with("promise-"));
//!
//! let event = Event::from(promise);
//! assert_eq!(event.kind(), RecordKind::Promise);
//! ```

mod delivery;
mod dependency;
mod distortion;
mod ids;
mod promise;
mod recourse;

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use delivery::{DeliveryAmounts, DeliveryEvent, DeliveryOutcome};
pub use dependency::DependencyEvent;
pub use distortion::{CorrectionStatus, DistortionType, MemoryDistortionEvent};
pub use ids::new_record_id;
pub use promise::{ImpactTier, PromiseEvent};
pub use recourse::RecourseEvent;

/// Open, ordered metadata attached to every event.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Every kind of record the ledger can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Promise,
    Delivery,
    Recourse,
    Dependency,
    MemoryDistortion,
    ThreadEntry,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Promise => "promise",
            Self::Delivery => "delivery",
            Self::Recourse => "recourse",
            Self::Dependency => "dependency",
            Self::MemoryDistortion => "memory_distortion",
            Self::ThreadEntry => "thread_entry",
        }
    }

    /// Prefix used when minting ids for this kind.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Promise => "promise",
            Self::Delivery => "delivery",
            Self::Recourse => "recourse",
            Self::Dependency => "dep",
            Self::MemoryDistortion => "mem",
            Self::ThreadEntry => "msg",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trust event. Serialized as `{id, type, ...fields, timestamp, metadata}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Promise(PromiseEvent),
    Delivery(DeliveryEvent),
    Recourse(RecourseEvent),
    Dependency(DependencyEvent),
    MemoryDistortion(MemoryDistortionEvent),
}

impl Event {
    pub fn id(&self) -> &str {
        match self {
            Self::Promise(e) => &e.id,
            Self::Delivery(e) => &e.id,
            Self::Recourse(e) => &e.id,
            Self::Dependency(e) => &e.id,
            Self::MemoryDistortion(e) => &e.id,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Promise(e) => e.timestamp,
            Self::Delivery(e) => e.timestamp,
            Self::Recourse(e) => e.timestamp,
            Self::Dependency(e) => e.timestamp,
            Self::MemoryDistortion(e) => e.timestamp,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        match self {
            Self::Promise(e) => &e.metadata,
            Self::Delivery(e) => &e.metadata,
            Self::Recourse(e) => &e.metadata,
            Self::Dependency(e) => &e.metadata,
            Self::MemoryDistortion(e) => &e.metadata,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Promise(_) => RecordKind::Promise,
            Self::Delivery(_) => RecordKind::Delivery,
            Self::Recourse(_) => RecordKind::Recourse,
            Self::Dependency(_) => RecordKind::Dependency,
            Self::MemoryDistortion(_) => RecordKind::MemoryDistortion,
        }
    }
}

impl From<PromiseEvent> for Event {
    fn from(e: PromiseEvent) -> Self {
        Self::Promise(e)
    }
}

impl From<DeliveryEvent> for Event {
    fn from(e: DeliveryEvent) -> Self {
        Self::Delivery(e)
    }
}

impl From<RecourseEvent> for Event {
    fn from(e: RecourseEvent) -> Self {
        Self::Recourse(e)
    }
}

impl From<DependencyEvent> for Event {
    fn from(e: DependencyEvent) -> Self {
        Self::Dependency(e)
    }
}

impl From<MemoryDistortionEvent> for Event {
    fn from(e: MemoryDistortionEvent) -> Self {
        Self::MemoryDistortion(e)
    }
}
