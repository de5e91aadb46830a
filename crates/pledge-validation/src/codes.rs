//! Stable issue codes emitted by the hygiene gates.

pub const EMAIL_EMPTY: &str = "EMAIL_EMPTY";
pub const EMAIL_FORMAT: &str = "EMAIL_FORMAT";
pub const DKIM_EMPTY: &str = "DKIM_EMPTY";
pub const DKIM_FORMAT: &str = "DKIM_FORMAT";

pub const HASH_EMPTY: &str = "HASH_EMPTY";
pub const HASH_FORMAT: &str = "HASH_FORMAT";

pub const TIMESTAMP_TOO_OLD: &str = "TIMESTAMP_TOO_OLD";
pub const TIMESTAMP_FUTURE: &str = "TIMESTAMP_FUTURE";
pub const TIMESTAMP_ORDER: &str = "TIMESTAMP_ORDER";

pub const METRIC_TOO_LOW: &str = "METRIC_TOO_LOW";
pub const METRIC_TOO_HIGH: &str = "METRIC_TOO_HIGH";
pub const METRIC_NOT_FINITE: &str = "METRIC_NOT_FINITE";

pub const AGENT_ID_INVALID: &str = "AGENT_ID_INVALID";
pub const PROMISE_TEXT_INVALID: &str = "PROMISE_TEXT_INVALID";
pub const PROMISE_ID_INVALID: &str = "PROMISE_ID_INVALID";
pub const PARTIAL_DELIVERY_AMOUNTS_MISSING: &str = "PARTIAL_DELIVERY_AMOUNTS_MISSING";
pub const DELIVERED_EXCEEDS_EXPECTED: &str = "DELIVERED_EXCEEDS_EXPECTED";
pub const RECOURSE_ACTION_INVALID: &str = "RECOURSE_ACTION_INVALID";
pub const WORKFLOW_ID_INVALID: &str = "WORKFLOW_ID_INVALID";
pub const DEPENDENCY_ID_INVALID: &str = "DEPENDENCY_ID_INVALID";
pub const DEPENDENCY_WEIGHT_RANGE: &str = "DEPENDENCY_WEIGHT_RANGE";
pub const DEPENDENCY_FAILURE_RATE_RANGE: &str = "DEPENDENCY_FAILURE_RATE_RANGE";
pub const DEPENDENCY_FALLBACK_RANGE: &str = "DEPENDENCY_FALLBACK_RANGE";
pub const SESSION_ID_INVALID: &str = "SESSION_ID_INVALID";

pub const MESSAGE_ID_INVALID: &str = "MESSAGE_ID_INVALID";
pub const REFERENCES_MISSING_PARENT: &str = "REFERENCES_MISSING_PARENT";

pub const DELIVERY_BEFORE_PROMISE: &str = "DELIVERY_BEFORE_PROMISE";
pub const ORPHAN_DELIVERY: &str = "ORPHAN_DELIVERY";
pub const ORPHAN_RECOURSE: &str = "ORPHAN_RECOURSE";
pub const CHAIN_EMPTY: &str = "CHAIN_EMPTY";
pub const CHAIN_REFERENCE_BROKEN: &str = "CHAIN_REFERENCE_BROKEN";
pub const CHAIN_REFERENCES_BROKEN: &str = "CHAIN_REFERENCES_BROKEN";
pub const CHAIN_TIMESTAMP_ORDER: &str = "CHAIN_TIMESTAMP_ORDER";
