use chrono::{DateTime, Utc};
use pledge_ledger::LedgerState;

use crate::models::{PromiseProvenance, PromiseStatus};

pub fn promise_provenance(state: &LedgerState, promise_id: &str) -> PromiseProvenance {
    let Some(promise) = state.get_promise(promise_id) else {
        return PromiseProvenance::NotFound {
            promise_id: promise_id.to_string(),
        };
    };

    let (status, outcome) = match state.latest_delivery(promise_id) {
        Some(latest) => (PromiseStatus::Completed, Some(latest.outcome)),
        None => (PromiseStatus::Pending, None),
    };

    PromiseProvenance::Found {
        promise: promise.clone(),
        status,
        outcome,
        deliveries: state
            .deliveries_by_promise(promise_id)
            .into_iter()
            .cloned()
            .collect(),
        recourses: state
            .recourses_by_promise(promise_id)
            .into_iter()
            .cloned()
            .collect(),
    }
}

/// Provenance of every promise by `agent_id` inside the optional bounds,
/// both inclusive, oldest first.
pub fn trace_agent_promises(
    state: &LedgerState,
    agent_id: &str,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Vec<PromiseProvenance> {
    state
        .promises_by_agent(agent_id)
        .into_iter()
        .filter(|p| within(p.timestamp, start, end))
        .map(|p| promise_provenance(state, &p.id))
        .collect()
}

pub(crate) fn within(
    ts: DateTime<Utc>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> bool {
    start.map_or(true, |s| ts >= s) && end.map_or(true, |e| ts <= e)
}
