//! # pledge-ledger
//!
//! Append-only store for trust events and thread entries.
//!
//! Each record kind lives in its own map inside one [`LedgerState`], with
//! secondary indices by agent, promise, workflow and thread parent plus a
//! time index per kind. [`EventStore`] wraps the state in a single `RwLock`.

pub mod consistency;
pub mod export;
mod index;
pub mod state;
pub mod store;
mod thread;
pub mod window;

pub use consistency::{ConsistencyReport, DanglingReference};
pub use export::LedgerExport;
pub use index::TimeKey;
pub use state::{InsertOutcome, LedgerCounts, LedgerState};
pub use store::EventStore;
pub use window::window_start;
