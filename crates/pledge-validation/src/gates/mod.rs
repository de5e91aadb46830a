mod email;
mod hash;
mod metrics;
mod timestamp;

pub use email::EmailGate;
pub use hash::HashGate;
pub use metrics::MetricsGate;
pub use timestamp::TimestampGate;
