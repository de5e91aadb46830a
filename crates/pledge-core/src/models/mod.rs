mod memory_score;
mod pdr_breakdown;
mod snapshot;
mod thread_chain;
mod validation;

pub use memory_score::MemoryScore;
pub use pdr_breakdown::PdrBreakdown;
pub use snapshot::TrustSnapshot;
pub use thread_chain::{ChainTermination, ThreadChain};
pub use validation::{ValidationIssue, ValidationReport, ValidationSeverity};
