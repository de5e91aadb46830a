//! # pledge-core
//!
//! Foundation crate for the Pledge trust ledger.
//! Defines the event model, thread entries, errors, config, models, and traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod models;
pub mod thread;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PledgeConfig;
pub use errors::{PledgeError, PledgeResult};
pub use events::{
    CorrectionStatus, DeliveryAmounts, DeliveryEvent, DeliveryOutcome, DependencyEvent,
    DistortionType, Event, ImpactTier, MemoryDistortionEvent, Metadata, PromiseEvent,
    RecordKind, RecourseEvent,
};
pub use models::{
    ChainTermination, MemoryScore, PdrBreakdown, ThreadChain, TrustSnapshot, ValidationIssue,
    ValidationReport, ValidationSeverity,
};
pub use thread::ThreadEntry;
pub use traits::{IEventValidator, IMetricsEngine};
