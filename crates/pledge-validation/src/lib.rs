//! # pledge-validation
//!
//! Hygiene gates for trust events and thread entries.
//!
//! The ledger accepts anything with a usable id; these gates are where
//! producers check field formats before admission. Findings are
//! [`ValidationIssue`](pledge_core::ValidationIssue)s with stable codes
//! (see [`codes`]); a report is invalid when any issue is an error or critical.

pub mod admission;
pub mod codes;
pub mod event_validator;
pub mod gates;
pub mod integrity;

pub use admission::HygieneGates;
pub use event_validator::EventValidator;
pub use gates::{EmailGate, HashGate, MetricsGate, TimestampGate};
pub use integrity::IntegrityChecker;
