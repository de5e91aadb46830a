use std::sync::Arc;

use chrono::{DateTime, Utc};
use pledge_core::config::PledgeConfig;
use pledge_core::errors::PledgeResult;
use pledge_core::models::{MemoryScore, PdrBreakdown, TrustSnapshot};
use pledge_core::traits::IMetricsEngine;
use pledge_ledger::{window_start, EventStore};
use pledge_observability::scoring_span;
use pledge_observability::tracing_setup::events;

use crate::chain::{ChainScorer, SignerReliability};
use crate::dependency::DependencyImpactScorer;
use crate::memory::MemoryScorer;
use crate::pdr::PdrScorer;

/// Runs the four scorers against one ledger snapshot and merges the
/// results into a [`TrustSnapshot`].
#[derive(Debug)]
pub struct MetricsEngine {
    store: Arc<EventStore>,
    pdr: PdrScorer,
    dependency: DependencyImpactScorer,
    memory: MemoryScorer,
    chain: ChainScorer,
    signer_reliability: SignerReliability,
}

impl MetricsEngine {
    /// Engine with default scoring parameters.
    pub fn new(store: Arc<EventStore>) -> Self {
        Self::from_parts(store, &PledgeConfig::default())
    }

    /// Engine with `config`'s scoring parameters, after range-checking them.
    pub fn with_config(store: Arc<EventStore>, config: &PledgeConfig) -> PledgeResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(store, config))
    }

    fn from_parts(store: Arc<EventStore>, config: &PledgeConfig) -> Self {
        Self {
            store,
            pdr: PdrScorer::new(config.pdr.clone()),
            dependency: DependencyImpactScorer::new(),
            memory: MemoryScorer::new(),
            chain: ChainScorer::new(config.chain.clone()),
            signer_reliability: SignerReliability::new(),
        }
    }

    /// Replace the signer-domain reliability map used for chain scores.
    pub fn with_signer_reliability(mut self, signer_reliability: SignerReliability) -> Self {
        self.signer_reliability = signer_reliability;
        self
    }

    pub fn signer_reliability(&self) -> &SignerReliability {
        &self.signer_reliability
    }

    pub fn store(&self) -> &Arc<EventStore> {
        &self.store
    }

    pub fn compute_pdr(
        &self,
        agent_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> PledgeResult<f64> {
        let state = self.store.snapshot()?;
        Ok(self.pdr.compute_pdr(&state, agent_id, start, end))
    }

    pub fn compute_pdr_breakdown(
        &self,
        agent_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> PledgeResult<PdrBreakdown> {
        let state = self.store.snapshot()?;
        Ok(self.pdr.compute_breakdown(&state, agent_id, start, end))
    }

    pub fn compute_di(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> PledgeResult<f64> {
        let state = self.store.snapshot()?;
        Ok(self.dependency.compute_di(&state, start, end))
    }

    pub fn compute_mdr(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> PledgeResult<MemoryScore> {
        let state = self.store.snapshot()?;
        Ok(self.memory.compute_mdr(&state, start, end))
    }

    /// Chain score using the engine's signer reliability map.
    pub fn compute_chain_score(&self, message_id: &str) -> PledgeResult<f64> {
        let state = self.store.snapshot()?;
        Ok(self
            .chain
            .compute_chain_score(&state, message_id, &self.signer_reliability))
    }
}

impl IMetricsEngine for MetricsEngine {
    fn compute_all_at(
        &self,
        now: DateTime<Utc>,
        agent_id: &str,
        window_days: i64,
        chain_message_id: Option<&str>,
    ) -> PledgeResult<TrustSnapshot> {
        let _span = scoring_span!(agent_id, window_days).entered();
        let start = window_start(now, window_days);
        let end = now;

        // One read guard for every scorer: a single point-in-time view.
        let state = self.store.snapshot()?;
        let pdr = self.pdr.compute_pdr(&state, agent_id, start, end);
        let dependency_impact = self.dependency.compute_di(&state, start, end);
        let memory = self.memory.compute_mdr(&state, start, end);
        let chain_score = chain_message_id
            .filter(|id| !id.is_empty())
            .map(|id| self.chain.compute_chain_score(&state, id, &self.signer_reliability));
        drop(state);

        let snapshot = TrustSnapshot {
            pdr: Some(pdr),
            dependency_impact: Some(dependency_impact),
            mdr: Some(memory.mdr),
            recovery_score: Some(memory.recovery),
            chain_score,
            computed_at: Some(now),
        };
        events::snapshot_computed(agent_id, &snapshot);
        Ok(snapshot)
    }
}
