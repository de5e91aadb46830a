use std::sync::Arc;

use chrono::{DateTime, Utc};
use pledge_core::config::defaults;
use pledge_core::errors::PledgeResult;
use pledge_core::events::Event;
use pledge_ledger::EventStore;
use pledge_observability::provenance_span;
use pledge_observability::tracing_setup::events;
use tracing::{debug, instrument};

use crate::models::{AgentStatistics, ChainVerification, PromiseProvenance};
use crate::{chain, promise, statistics};

/// Provenance queries against a shared [`EventStore`].
///
/// Each call takes one read snapshot; nothing here mutates the ledger.
#[derive(Debug, Clone)]
pub struct ProvenanceTracker {
    store: Arc<EventStore>,
}

impl ProvenanceTracker {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }

    pub fn promise_provenance(&self, promise_id: &str) -> PledgeResult<PromiseProvenance> {
        let _span = provenance_span!(promise_id).entered();
        let state = self.store.snapshot()?;
        let provenance = promise::promise_provenance(&state, promise_id);
        debug!(found = provenance.is_found(), "promise provenance resolved");
        Ok(provenance)
    }

    pub fn trace_agent_promises(
        &self,
        agent_id: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> PledgeResult<Vec<PromiseProvenance>> {
        let state = self.store.snapshot()?;
        Ok(promise::trace_agent_promises(&state, agent_id, start, end))
    }

    #[instrument(skip(self))]
    pub fn verify_thread_chain(&self, message_id: &str) -> PledgeResult<ChainVerification> {
        let state = self.store.snapshot()?;
        let verification = chain::verify_thread_chain(&state, message_id);
        if verification.found && !verification.verified {
            events::chain_unverified(
                message_id,
                verification.chain_length,
                verification.total_issues(),
            );
        }
        Ok(verification)
    }

    pub fn timeline(
        &self,
        agent_id: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> PledgeResult<Vec<Event>> {
        let state = self.store.snapshot()?;
        Ok(statistics::timeline(&state, agent_id, start, end))
    }

    pub fn statistics_at(
        &self,
        agent_id: &str,
        window_days: i64,
        now: DateTime<Utc>,
    ) -> PledgeResult<AgentStatistics> {
        let state = self.store.snapshot()?;
        let stats = statistics::statistics_at(&state, agent_id, window_days, now);
        debug!(
            agent_id,
            window_days,
            promises = stats.total_promises,
            delivery_rate = stats.delivery_rate,
            "agent statistics computed"
        );
        Ok(stats)
    }

    /// Statistics over the default window ending now.
    pub fn statistics(&self, agent_id: &str) -> PledgeResult<AgentStatistics> {
        self.statistics_at(agent_id, defaults::DEFAULT_WINDOW_DAYS, Utc::now())
    }
}
