//! Tracing setup: structured logging with span definitions and event helpers.

pub mod events;
pub mod spans;

use pledge_core::config::{ObservabilityConfig, ENV_LOG};
use tracing_subscriber::EnvFilter;

/// Filter directive to use: `PLEDGE_LOG` when set and non-empty, otherwise
/// the configured level.
pub fn resolve_filter<F>(config: &ObservabilityConfig, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ENV_LOG)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config.log_level.clone())
}

/// Install the global subscriber. Returns `false` when one is already set.
///
/// An unparseable filter falls back to `info`.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let directive = resolve_filter(config, |key| std::env::var(key).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter, config.json_output)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), true)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);
    if json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
