use chrono::{DateTime, Utc};

use crate::errors::PledgeResult;
use crate::models::TrustSnapshot;

/// Computes a full trust snapshot for one agent over a trailing window.
pub trait IMetricsEngine: Send + Sync {
    /// Window ends at the current wall-clock time.
    fn compute_all(
        &self,
        agent_id: &str,
        window_days: i64,
        chain_message_id: Option<&str>,
    ) -> PledgeResult<TrustSnapshot> {
        self.compute_all_at(Utc::now(), agent_id, window_days, chain_message_id)
    }

    /// Window is `[now - window_days, now]`.
    fn compute_all_at(
        &self,
        now: DateTime<Utc>,
        agent_id: &str,
        window_days: i64,
        chain_message_id: Option<&str>,
    ) -> PledgeResult<TrustSnapshot>;
}
