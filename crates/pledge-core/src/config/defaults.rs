// Single source of truth for all default values.

// --- Ledger ---
pub const DEFAULT_MAX_THREAD_DEPTH: usize = 10_000;

// --- PDR ---
pub const DEFAULT_DECAY_PERIOD_DAYS: f64 = 90.0;
pub const DEFAULT_RECOURSE_WEIGHT_FACTOR: f64 = 0.5;
pub const DEFAULT_CRITICAL_WEIGHT: f64 = 1.0;
pub const DEFAULT_HIGH_WEIGHT: f64 = 0.8;
pub const DEFAULT_MEDIUM_WEIGHT: f64 = 0.5;
pub const DEFAULT_LOW_WEIGHT: f64 = 0.2;
pub const DEFAULT_UNKNOWN_TIER_WEIGHT: f64 = 0.5;

// --- Chain ---
pub const DEFAULT_SIGNER_RELIABILITY: f64 = 0.5;
pub const DEFAULT_DEPTH_DECAY_DIVISOR: f64 = 2.0;
pub const DEFAULT_DIVERSITY_BONUS_PER_DOMAIN: f64 = 0.05;
pub const DEFAULT_MAX_DIVERSITY_BONUS: f64 = 0.2;
pub const DEFAULT_BREAK_PENALTY_PER_GAP: f64 = 0.2;
pub const DEFAULT_MAX_BREAK_PENALTY: f64 = 0.5;

// --- Validation ---
pub const DEFAULT_MAX_PAST_DAYS: i64 = 365;
pub const DEFAULT_MAX_FUTURE_DAYS: i64 = 365;

// --- Metrics ---
pub const DEFAULT_WINDOW_DAYS: i64 = 90;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
