use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use pledge_core::config::{DuplicatePolicy, LedgerConfig};
use pledge_core::errors::LedgerError;
use pledge_core::models::ThreadChain;
use pledge_core::{
    DeliveryEvent, DependencyEvent, Event, MemoryDistortionEvent, PromiseEvent, RecordKind,
    RecourseEvent, ThreadEntry,
};
use serde::{Deserialize, Serialize};

use crate::index::{ids, ids_in_range, LedgerIndex, TimeKey};
use crate::thread;

/// Record counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerCounts {
    pub promises: usize,
    pub deliveries: usize,
    pub recourses: usize,
    pub dependencies: usize,
    pub memory_distortions: usize,
    pub thread_entries: usize,
}

impl LedgerCounts {
    pub fn total(&self) -> usize {
        self.promises
            + self.deliveries
            + self.recourses
            + self.dependencies
            + self.memory_distortions
            + self.thread_entries
    }
}

/// Whether an insert added a new record or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Replaced,
}

/// The ledger's owned aggregate: one map per record kind plus the indices.
///
/// Read access goes through [`crate::EventStore::snapshot`]; every query here
/// borrows from the state and orders results by `(timestamp, id)`.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    config: LedgerConfig,
    promises: HashMap<String, PromiseEvent>,
    deliveries: HashMap<String, DeliveryEvent>,
    recourses: HashMap<String, RecourseEvent>,
    dependencies: HashMap<String, DependencyEvent>,
    memory_distortions: HashMap<String, MemoryDistortionEvent>,
    thread_entries: HashMap<String, ThreadEntry>,
    index: LedgerIndex,
}

fn resolve<'a, T>(map: &'a HashMap<String, T>, set: Option<&'a BTreeSet<TimeKey>>) -> Vec<&'a T> {
    set.map(|s| ids(s).filter_map(|id| map.get(id)).collect())
        .unwrap_or_default()
}

fn resolve_range<'a, T>(
    map: &'a HashMap<String, T>,
    set: &'a BTreeSet<TimeKey>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<&'a T> {
    ids_in_range(set, start, end)
        .filter_map(|id| map.get(id))
        .collect()
}

/// Gate shared by every insert: empty ids never enter the ledger and
/// collisions follow the configured policy.
fn admit(
    kind: RecordKind,
    id: &str,
    exists: bool,
    policy: DuplicatePolicy,
) -> Result<InsertOutcome, LedgerError> {
    if id.is_empty() {
        return Err(LedgerError::EmptyId { kind });
    }
    match (exists, policy) {
        (false, _) => Ok(InsertOutcome::Inserted),
        (true, DuplicatePolicy::Overwrite) => Ok(InsertOutcome::Replaced),
        (true, DuplicatePolicy::Reject) => Err(LedgerError::DuplicateId {
            kind,
            id: id.to_string(),
        }),
    }
}

impl LedgerState {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // --- Inserts (crate-private; callers go through EventStore) ---

    pub(crate) fn insert_promise(&mut self, p: PromiseEvent) -> Result<InsertOutcome, LedgerError> {
        let outcome = admit(
            RecordKind::Promise,
            &p.id,
            self.promises.contains_key(&p.id),
            self.config.duplicate_policy,
        )?;
        if let Some(old) = self.promises.remove(&p.id) {
            self.index.unindex_promise(&old);
        }
        self.index.index_promise(&p);
        self.promises.insert(p.id.clone(), p);
        Ok(outcome)
    }

    pub(crate) fn insert_delivery(&mut self, d: DeliveryEvent) -> Result<InsertOutcome, LedgerError> {
        let outcome = admit(
            RecordKind::Delivery,
            &d.id,
            self.deliveries.contains_key(&d.id),
            self.config.duplicate_policy,
        )?;
        if let Some(old) = self.deliveries.remove(&d.id) {
            self.index.unindex_delivery(&old);
        }
        self.index.index_delivery(&d);
        self.deliveries.insert(d.id.clone(), d);
        Ok(outcome)
    }

    pub(crate) fn insert_recourse(&mut self, r: RecourseEvent) -> Result<InsertOutcome, LedgerError> {
        let outcome = admit(
            RecordKind::Recourse,
            &r.id,
            self.recourses.contains_key(&r.id),
            self.config.duplicate_policy,
        )?;
        if let Some(old) = self.recourses.remove(&r.id) {
            self.index.unindex_recourse(&old);
        }
        self.index.index_recourse(&r);
        self.recourses.insert(r.id.clone(), r);
        Ok(outcome)
    }

    pub(crate) fn insert_dependency(
        &mut self,
        d: DependencyEvent,
    ) -> Result<InsertOutcome, LedgerError> {
        let outcome = admit(
            RecordKind::Dependency,
            &d.id,
            self.dependencies.contains_key(&d.id),
            self.config.duplicate_policy,
        )?;
        if let Some(old) = self.dependencies.remove(&d.id) {
            self.index.unindex_dependency(&old);
        }
        self.index.index_dependency(&d);
        self.dependencies.insert(d.id.clone(), d);
        Ok(outcome)
    }

    pub(crate) fn insert_memory_distortion(
        &mut self,
        m: MemoryDistortionEvent,
    ) -> Result<InsertOutcome, LedgerError> {
        let outcome = admit(
            RecordKind::MemoryDistortion,
            &m.id,
            self.memory_distortions.contains_key(&m.id),
            self.config.duplicate_policy,
        )?;
        if let Some(old) = self.memory_distortions.remove(&m.id) {
            self.index.unindex_distortion(&old);
        }
        self.index.index_distortion(&m);
        self.memory_distortions.insert(m.id.clone(), m);
        Ok(outcome)
    }

    pub(crate) fn insert_thread_entry(
        &mut self,
        t: ThreadEntry,
    ) -> Result<InsertOutcome, LedgerError> {
        let outcome = admit(
            RecordKind::ThreadEntry,
            &t.message_id,
            self.thread_entries.contains_key(&t.message_id),
            self.config.duplicate_policy,
        )?;
        if let Some(old) = self.thread_entries.remove(&t.message_id) {
            self.index.unindex_thread_entry(&old);
        }
        self.index.index_thread_entry(&t);
        self.thread_entries.insert(t.message_id.clone(), t);
        Ok(outcome)
    }

    pub(crate) fn insert_event(&mut self, event: Event) -> Result<InsertOutcome, LedgerError> {
        match event {
            Event::Promise(p) => self.insert_promise(p),
            Event::Delivery(d) => self.insert_delivery(d),
            Event::Recourse(r) => self.insert_recourse(r),
            Event::Dependency(d) => self.insert_dependency(d),
            Event::MemoryDistortion(m) => self.insert_memory_distortion(m),
        }
    }

    // --- Point lookups ---

    pub fn get_promise(&self, id: &str) -> Option<&PromiseEvent> {
        self.promises.get(id)
    }

    pub fn get_delivery(&self, id: &str) -> Option<&DeliveryEvent> {
        self.deliveries.get(id)
    }

    pub fn get_thread_entry(&self, message_id: &str) -> Option<&ThreadEntry> {
        self.thread_entries.get(message_id)
    }

    pub fn contains(&self, kind: RecordKind, id: &str) -> bool {
        match kind {
            RecordKind::Promise => self.promises.contains_key(id),
            RecordKind::Delivery => self.deliveries.contains_key(id),
            RecordKind::Recourse => self.recourses.contains_key(id),
            RecordKind::Dependency => self.dependencies.contains_key(id),
            RecordKind::MemoryDistortion => self.memory_distortions.contains_key(id),
            RecordKind::ThreadEntry => self.thread_entries.contains_key(id),
        }
    }

    // --- Secondary-index queries ---

    pub fn promises_by_agent(&self, agent_id: &str) -> Vec<&PromiseEvent> {
        resolve(&self.promises, self.index.promises_by_agent.get(agent_id))
    }

    /// The agent's promises with timestamp in `[start, end]`.
    pub fn agent_promises_in_range(
        &self,
        agent_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<&PromiseEvent> {
        match self.index.promises_by_agent.get(agent_id) {
            Some(set) => resolve_range(&self.promises, set, start, end),
            None => Vec::new(),
        }
    }

    pub fn deliveries_by_promise(&self, promise_id: &str) -> Vec<&DeliveryEvent> {
        resolve(&self.deliveries, self.index.deliveries_by_promise.get(promise_id))
    }

    /// The delivery with the greatest `(timestamp, id)` for a promise.
    pub fn latest_delivery(&self, promise_id: &str) -> Option<&DeliveryEvent> {
        self.index
            .deliveries_by_promise
            .get(promise_id)
            .and_then(|set| set.iter().next_back())
            .and_then(|(_, id)| self.deliveries.get(id))
    }

    pub fn recourses_by_promise(&self, promise_id: &str) -> Vec<&RecourseEvent> {
        resolve(&self.recourses, self.index.recourses_by_promise.get(promise_id))
    }

    pub fn has_recourse(&self, promise_id: &str) -> bool {
        self.index.recourses_by_promise.contains_key(promise_id)
    }

    pub fn dependencies_by_workflow(&self, workflow_id: &str) -> Vec<&DependencyEvent> {
        resolve(
            &self.dependencies,
            self.index.dependencies_by_workflow.get(workflow_id),
        )
    }

    /// Direct replies to `message_id`.
    pub fn replies_to(&self, message_id: &str) -> Vec<&ThreadEntry> {
        resolve(&self.thread_entries, self.index.replies_by_parent.get(message_id))
    }

    // --- Time-range queries (inclusive bounds) ---

    pub fn promises_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<&PromiseEvent> {
        resolve_range(&self.promises, &self.index.promise_times, start, end)
    }

    pub fn deliveries_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<&DeliveryEvent> {
        resolve_range(&self.deliveries, &self.index.delivery_times, start, end)
    }

    pub fn recourses_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<&RecourseEvent> {
        resolve_range(&self.recourses, &self.index.recourse_times, start, end)
    }

    pub fn dependencies_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<&DependencyEvent> {
        resolve_range(&self.dependencies, &self.index.dependency_times, start, end)
    }

    pub fn memory_distortions_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<&MemoryDistortionEvent> {
        resolve_range(
            &self.memory_distortions,
            &self.index.distortion_times,
            start,
            end,
        )
    }

    pub fn count_promises_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> usize {
        ids_in_range(&self.index.promise_times, start, end).count()
    }

    /// Promises, deliveries and recourses in `[start, end]`, merged by
    /// `(timestamp, id)`. Dependencies and distortions are not included.
    pub fn events_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Event> {
        let mut keyed: Vec<(TimeKey, Event)> = Vec::new();
        for p in self.promises_in_range(start, end) {
            keyed.push(((p.timestamp, p.id.clone()), Event::Promise(p.clone())));
        }
        for d in self.deliveries_in_range(start, end) {
            keyed.push(((d.timestamp, d.id.clone()), Event::Delivery(d.clone())));
        }
        for r in self.recourses_in_range(start, end) {
            keyed.push(((r.timestamp, r.id.clone()), Event::Recourse(r.clone())));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed.into_iter().map(|(_, e)| e).collect()
    }

    // --- Full ordered scans ---

    pub fn promises(&self) -> Vec<&PromiseEvent> {
        resolve(&self.promises, Some(&self.index.promise_times))
    }

    pub fn deliveries(&self) -> Vec<&DeliveryEvent> {
        resolve(&self.deliveries, Some(&self.index.delivery_times))
    }

    pub fn recourses(&self) -> Vec<&RecourseEvent> {
        resolve(&self.recourses, Some(&self.index.recourse_times))
    }

    pub fn dependencies(&self) -> Vec<&DependencyEvent> {
        resolve(&self.dependencies, Some(&self.index.dependency_times))
    }

    pub fn memory_distortions(&self) -> Vec<&MemoryDistortionEvent> {
        resolve(&self.memory_distortions, Some(&self.index.distortion_times))
    }

    pub fn thread_entries(&self) -> Vec<&ThreadEntry> {
        resolve(&self.thread_entries, Some(&self.index.thread_times))
    }

    // --- Threads ---

    /// Walk back from `message_id` via `in_reply_to`; entries come back root first.
    pub fn thread_chain(&self, message_id: &str) -> ThreadChain {
        thread::walk_back(&self.thread_entries, message_id, self.config.max_thread_depth)
    }

    pub fn counts(&self) -> LedgerCounts {
        LedgerCounts {
            promises: self.promises.len(),
            deliveries: self.deliveries.len(),
            recourses: self.recourses.len(),
            dependencies: self.dependencies.len(),
            memory_distortions: self.memory_distortions.len(),
            thread_entries: self.thread_entries.len(),
        }
    }
}
