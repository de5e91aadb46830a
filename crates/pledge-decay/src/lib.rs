//! # pledge-decay
//!
//! Maps an event's age to a weight in [0, 1] so recent behavior dominates.
//! Three curves: linear, exponential half-life, logarithmic.

pub mod engine;
pub mod formula;

pub use engine::DecayFunction;
pub use formula::decay_weight;
pub use pledge_core::config::DecayCurve;
