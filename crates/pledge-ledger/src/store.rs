use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use pledge_core::config::LedgerConfig;
use pledge_core::errors::{LedgerError, PledgeError, PledgeResult};
use pledge_core::models::ThreadChain;
use pledge_core::{
    DeliveryEvent, DependencyEvent, Event, MemoryDistortionEvent, PromiseEvent, RecordKind,
    RecourseEvent, ThreadEntry,
};
use tracing::{debug, instrument, warn};

use crate::consistency::{self, ConsistencyReport};
use crate::export::LedgerExport;
use crate::state::{InsertOutcome, LedgerCounts, LedgerState};

/// Thread-safe, append-only trust event ledger.
///
/// One `RwLock` guards the whole [`LedgerState`]: appends update every index
/// before the write lock is released, and readers either run a single query
/// or hold a [`snapshot`](Self::snapshot) across several.
#[derive(Debug, Default)]
pub struct EventStore {
    state: RwLock<LedgerState>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            state: RwLock::new(LedgerState::new(config)),
        }
    }

    /// A read guard over the whole state: one consistent view for many queries.
    pub fn snapshot(&self) -> PledgeResult<RwLockReadGuard<'_, LedgerState>> {
        self.state
            .read()
            .map_err(|e| PledgeError::ConcurrencyError(format!("ledger read lock: {e}")))
    }

    fn write(&self) -> PledgeResult<RwLockWriteGuard<'_, LedgerState>> {
        self.state
            .write()
            .map_err(|e| PledgeError::ConcurrencyError(format!("ledger write lock: {e}")))
    }

    fn append<T>(
        &self,
        kind: RecordKind,
        id: String,
        record: T,
        insert: impl FnOnce(&mut LedgerState, T) -> Result<InsertOutcome, LedgerError>,
    ) -> PledgeResult<String> {
        let mut state = self.write()?;
        match insert(&mut state, record) {
            Ok(InsertOutcome::Inserted) => debug!(%kind, id = %id, "record appended"),
            Ok(InsertOutcome::Replaced) => {
                warn!(%kind, id = %id, "duplicate id overwrote stored record")
            }
            Err(e) => {
                warn!(%kind, id = %id, error = %e, "append rejected");
                return Err(e.into());
            }
        }
        Ok(id)
    }

    // --- Appends ---

    #[instrument(skip(self, promise), fields(id = %promise.id, agent_id = %promise.agent_id))]
    pub fn add_promise(&self, promise: PromiseEvent) -> PledgeResult<String> {
        let id = promise.id.clone();
        self.append(RecordKind::Promise, id, promise, LedgerState::insert_promise)
    }

    #[instrument(skip(self, delivery), fields(id = %delivery.id, promise_id = %delivery.promise_id))]
    pub fn add_delivery(&self, delivery: DeliveryEvent) -> PledgeResult<String> {
        let id = delivery.id.clone();
        self.append(RecordKind::Delivery, id, delivery, LedgerState::insert_delivery)
    }

    #[instrument(skip(self, recourse), fields(id = %recourse.id, promise_id = %recourse.promise_id))]
    pub fn add_recourse(&self, recourse: RecourseEvent) -> PledgeResult<String> {
        let id = recourse.id.clone();
        self.append(RecordKind::Recourse, id, recourse, LedgerState::insert_recourse)
    }

    #[instrument(skip(self, dependency), fields(id = %dependency.id, workflow_id = %dependency.workflow_id))]
    pub fn add_dependency(&self, dependency: DependencyEvent) -> PledgeResult<String> {
        let id = dependency.id.clone();
        self.append(
            RecordKind::Dependency,
            id,
            dependency,
            LedgerState::insert_dependency,
        )
    }

    #[instrument(skip(self, distortion), fields(id = %distortion.id, session_id = %distortion.session_id))]
    pub fn add_memory_distortion(&self, distortion: MemoryDistortionEvent) -> PledgeResult<String> {
        let id = distortion.id.clone();
        self.append(
            RecordKind::MemoryDistortion,
            id,
            distortion,
            LedgerState::insert_memory_distortion,
        )
    }

    #[instrument(skip(self, entry), fields(message_id = %entry.message_id))]
    pub fn add_thread_entry(&self, entry: ThreadEntry) -> PledgeResult<String> {
        let id = entry.message_id.clone();
        self.append(
            RecordKind::ThreadEntry,
            id,
            entry,
            LedgerState::insert_thread_entry,
        )
    }

    /// Append any event, routed by its variant.
    pub fn add_event(&self, event: Event) -> PledgeResult<String> {
        match event {
            Event::Promise(p) => self.add_promise(p),
            Event::Delivery(d) => self.add_delivery(d),
            Event::Recourse(r) => self.add_recourse(r),
            Event::Dependency(d) => self.add_dependency(d),
            Event::MemoryDistortion(m) => self.add_memory_distortion(m),
        }
    }

    /// Append every record of an export atomically.
    ///
    /// Records are applied to a copy of the state under the write lock; the
    /// ledger is left unchanged if any insert fails.
    #[instrument(skip(self, export), fields(records = export.record_count()))]
    pub fn import(&self, export: LedgerExport) -> PledgeResult<usize> {
        let mut state = self.write()?;
        let mut staged = state.clone();
        let count = export.record_count();

        let events = export
            .promises
            .into_iter()
            .map(Event::from)
            .chain(export.deliveries.into_iter().map(Event::from))
            .chain(export.recourses.into_iter().map(Event::from))
            .chain(export.dependencies.into_iter().map(Event::from))
            .chain(export.memory_distortions.into_iter().map(Event::from));
        for event in events {
            staged.insert_event(event)?;
        }
        for entry in export.thread_entries {
            staged.insert_thread_entry(entry)?;
        }

        *state = staged;
        debug!(count, "export imported");
        Ok(count)
    }

    // --- Queries (clones, ordered by (timestamp, id)) ---

    pub fn get_promise(&self, id: &str) -> PledgeResult<Option<PromiseEvent>> {
        Ok(self.snapshot()?.get_promise(id).cloned())
    }

    pub fn get_thread_entry(&self, message_id: &str) -> PledgeResult<Option<ThreadEntry>> {
        Ok(self.snapshot()?.get_thread_entry(message_id).cloned())
    }

    pub fn promises_by_agent(&self, agent_id: &str) -> PledgeResult<Vec<PromiseEvent>> {
        Ok(cloned(self.snapshot()?.promises_by_agent(agent_id)))
    }

    pub fn deliveries_by_promise(&self, promise_id: &str) -> PledgeResult<Vec<DeliveryEvent>> {
        Ok(cloned(self.snapshot()?.deliveries_by_promise(promise_id)))
    }

    pub fn recourses_by_promise(&self, promise_id: &str) -> PledgeResult<Vec<RecourseEvent>> {
        Ok(cloned(self.snapshot()?.recourses_by_promise(promise_id)))
    }

    pub fn dependencies_by_workflow(&self, workflow_id: &str) -> PledgeResult<Vec<DependencyEvent>> {
        Ok(cloned(self.snapshot()?.dependencies_by_workflow(workflow_id)))
    }

    /// Promises, deliveries and recourses with timestamp in `[start, end]`.
    pub fn events_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> PledgeResult<Vec<Event>> {
        Ok(self.snapshot()?.events_in_range(start, end))
    }

    /// Root-first chain ending at `message_id`.
    #[instrument(skip(self))]
    pub fn thread_chain(&self, message_id: &str) -> PledgeResult<ThreadChain> {
        let chain = self.snapshot()?.thread_chain(message_id);
        if !chain.termination.is_complete() {
            debug!(termination = ?chain.termination, len = chain.len(), "thread walk stopped early");
        }
        Ok(chain)
    }

    pub fn replies_to(&self, message_id: &str) -> PledgeResult<Vec<ThreadEntry>> {
        Ok(cloned(self.snapshot()?.replies_to(message_id)))
    }

    pub fn counts(&self) -> PledgeResult<LedgerCounts> {
        Ok(self.snapshot()?.counts())
    }

    pub fn check_consistency(&self) -> PledgeResult<ConsistencyReport> {
        let report = consistency::check(&*self.snapshot()?);
        if !report.is_consistent() {
            warn!(issues = report.issue_count(), "ledger has dangling references");
        }
        Ok(report)
    }

    pub fn export(&self) -> PledgeResult<LedgerExport> {
        Ok(LedgerExport::from_state(&*self.snapshot()?))
    }
}

fn cloned<T: Clone>(items: Vec<&T>) -> Vec<T> {
    items.into_iter().cloned().collect()
}
