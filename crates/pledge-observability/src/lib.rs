//! # pledge-observability
//!
//! Subscriber setup plus the span and event vocabulary shared by the
//! ledger-facing crates.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter, resolve_filter};
