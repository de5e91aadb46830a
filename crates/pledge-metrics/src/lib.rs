//! # pledge-metrics
//!
//! Four pure scorers over a [`pledge_ledger::LedgerState`] view and the
//! [`MetricsEngine`] facade that runs them against one snapshot.
//!
//! Every scorer is total: "no data" resolves to a documented fallback
//! constant and every score is clamped to [0, 1].

pub mod chain;
pub mod dependency;
pub mod engine;
pub mod memory;
pub mod pdr;

pub use chain::{ChainScorer, SignerReliability};
pub use dependency::DependencyImpactScorer;
pub use engine::MetricsEngine;
pub use memory::MemoryScorer;
pub use pdr::PdrScorer;
