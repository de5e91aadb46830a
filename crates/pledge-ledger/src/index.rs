//! Secondary indices over the ledger's primary maps.
//!
//! Every index entry is a `(timestamp, id)` key so iteration order is the
//! query order. Indices are maintained incrementally under the ledger's
//! write lock and never rebuilt.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use pledge_core::{
    DeliveryEvent, DependencyEvent, MemoryDistortionEvent, PromiseEvent, RecourseEvent,
    ThreadEntry,
};

/// Sort key shared by every index.
pub type TimeKey = (DateTime<Utc>, String);

type Postings = HashMap<String, BTreeSet<TimeKey>>;

#[derive(Debug, Default, Clone)]
pub struct LedgerIndex {
    pub(crate) promises_by_agent: Postings,
    pub(crate) deliveries_by_promise: Postings,
    pub(crate) recourses_by_promise: Postings,
    pub(crate) dependencies_by_workflow: Postings,
    pub(crate) replies_by_parent: Postings,

    pub(crate) promise_times: BTreeSet<TimeKey>,
    pub(crate) delivery_times: BTreeSet<TimeKey>,
    pub(crate) recourse_times: BTreeSet<TimeKey>,
    pub(crate) dependency_times: BTreeSet<TimeKey>,
    pub(crate) distortion_times: BTreeSet<TimeKey>,
    pub(crate) thread_times: BTreeSet<TimeKey>,
}

fn key(timestamp: DateTime<Utc>, id: &str) -> TimeKey {
    (timestamp, id.to_string())
}

fn link(postings: &mut Postings, owner: &str, k: TimeKey) {
    postings.entry(owner.to_string()).or_default().insert(k);
}

fn unlink(postings: &mut Postings, owner: &str, k: &TimeKey) {
    if let Some(set) = postings.get_mut(owner) {
        set.remove(k);
        if set.is_empty() {
            postings.remove(owner);
        }
    }
}

/// Ids in `set` whose timestamp lies in `[start, end]`, in key order.
pub(crate) fn ids_in_range(
    set: &BTreeSet<TimeKey>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> impl Iterator<Item = &str> {
    set.range((start, String::new())..)
        .take_while(move |(ts, _)| *ts <= end)
        .map(|(_, id)| id.as_str())
}

/// Ids in `set`, in key order.
pub(crate) fn ids(set: &BTreeSet<TimeKey>) -> impl Iterator<Item = &str> {
    set.iter().map(|(_, id)| id.as_str())
}

impl LedgerIndex {
    pub(crate) fn index_promise(&mut self, p: &PromiseEvent) {
        let k = key(p.timestamp, &p.id);
        link(&mut self.promises_by_agent, &p.agent_id, k.clone());
        self.promise_times.insert(k);
    }

    pub(crate) fn unindex_promise(&mut self, p: &PromiseEvent) {
        let k = key(p.timestamp, &p.id);
        unlink(&mut self.promises_by_agent, &p.agent_id, &k);
        self.promise_times.remove(&k);
    }

    pub(crate) fn index_delivery(&mut self, d: &DeliveryEvent) {
        let k = key(d.timestamp, &d.id);
        link(&mut self.deliveries_by_promise, &d.promise_id, k.clone());
        self.delivery_times.insert(k);
    }

    pub(crate) fn unindex_delivery(&mut self, d: &DeliveryEvent) {
        let k = key(d.timestamp, &d.id);
        unlink(&mut self.deliveries_by_promise, &d.promise_id, &k);
        self.delivery_times.remove(&k);
    }

    pub(crate) fn index_recourse(&mut self, r: &RecourseEvent) {
        let k = key(r.timestamp, &r.id);
        link(&mut self.recourses_by_promise, &r.promise_id, k.clone());
        self.recourse_times.insert(k);
    }

    pub(crate) fn unindex_recourse(&mut self, r: &RecourseEvent) {
        let k = key(r.timestamp, &r.id);
        unlink(&mut self.recourses_by_promise, &r.promise_id, &k);
        self.recourse_times.remove(&k);
    }

    pub(crate) fn index_dependency(&mut self, d: &DependencyEvent) {
        let k = key(d.timestamp, &d.id);
        link(&mut self.dependencies_by_workflow, &d.workflow_id, k.clone());
        self.dependency_times.insert(k);
    }

    pub(crate) fn unindex_dependency(&mut self, d: &DependencyEvent) {
        let k = key(d.timestamp, &d.id);
        unlink(&mut self.dependencies_by_workflow, &d.workflow_id, &k);
        self.dependency_times.remove(&k);
    }

    pub(crate) fn index_distortion(&mut self, m: &MemoryDistortionEvent) {
        self.distortion_times.insert(key(m.timestamp, &m.id));
    }

    pub(crate) fn unindex_distortion(&mut self, m: &MemoryDistortionEvent) {
        self.distortion_times.remove(&key(m.timestamp, &m.id));
    }

    pub(crate) fn index_thread_entry(&mut self, t: &ThreadEntry) {
        let k = key(t.timestamp, &t.message_id);
        if let Some(parent) = &t.in_reply_to {
            link(&mut self.replies_by_parent, parent, k.clone());
        }
        self.thread_times.insert(k);
    }

    pub(crate) fn unindex_thread_entry(&mut self, t: &ThreadEntry) {
        let k = key(t.timestamp, &t.message_id);
        if let Some(parent) = &t.in_reply_to {
            unlink(&mut self.replies_by_parent, parent, &k);
        }
        self.thread_times.remove(&k);
    }
}
