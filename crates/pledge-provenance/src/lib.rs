//! # pledge-provenance
//!
//! Read-only reporting over the ledger: what happened to a promise, what an
//! agent did over a period, and whether a stored thread chain is intact.

pub mod chain;
pub mod models;
pub mod promise;
pub mod statistics;
pub mod tracker;

pub use models::{
    AgentStatistics, ChainGap, ChainVerification, OutcomeCounts, PromiseProvenance,
    PromiseStatus, SignatureGap, TimestampIssue,
};
pub use tracker::ProvenanceTracker;
