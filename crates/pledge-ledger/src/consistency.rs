//! Referential-integrity pass over soft id references.
//!
//! Inserts never check that a referenced promise or parent message exists;
//! this pass reports every dangling reference instead.

use serde::{Deserialize, Serialize};

use crate::state::LedgerState;

/// A record pointing at an id the ledger does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanglingReference {
    pub record_id: String,
    pub missing_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// Deliveries whose `promise_id` is unknown.
    pub orphan_deliveries: Vec<DanglingReference>,
    /// Recourses whose `promise_id` is unknown.
    pub orphan_recourses: Vec<DanglingReference>,
    /// Thread entries whose `in_reply_to` parent is absent.
    pub missing_parents: Vec<DanglingReference>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.orphan_deliveries.is_empty()
            && self.orphan_recourses.is_empty()
            && self.missing_parents.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.orphan_deliveries.len() + self.orphan_recourses.len() + self.missing_parents.len()
    }
}

/// Scan the state in `(timestamp, id)` order.
pub fn check(state: &LedgerState) -> ConsistencyReport {
    let orphan_deliveries = state
        .deliveries()
        .into_iter()
        .filter(|d| state.get_promise(&d.promise_id).is_none())
        .map(|d| DanglingReference {
            record_id: d.id.clone(),
            missing_id: d.promise_id.clone(),
        })
        .collect();

    let orphan_recourses = state
        .recourses()
        .into_iter()
        .filter(|r| state.get_promise(&r.promise_id).is_none())
        .map(|r| DanglingReference {
            record_id: r.id.clone(),
            missing_id: r.promise_id.clone(),
        })
        .collect();

    let missing_parents = state
        .thread_entries()
        .into_iter()
        .filter_map(|t| {
            let parent = t.in_reply_to.as_ref()?;
            state.get_thread_entry(parent).is_none().then(|| DanglingReference {
                record_id: t.message_id.clone(),
                missing_id: parent.clone(),
            })
        })
        .collect();

    ConsistencyReport {
        orphan_deliveries,
        orphan_recourses,
        missing_parents,
    }
}
