use chrono::{DateTime, Utc};
use pledge_core::events::Event;
use pledge_ledger::{window_start, LedgerState};

use crate::models::{AgentStatistics, OutcomeCounts};
use crate::promise::within;

/// Promises by `agent_id` plus the deliveries and recourses that point at
/// them, ordered by `(timestamp, id)`. Bounds apply to each event's own
/// timestamp.
pub fn timeline(
    state: &LedgerState,
    agent_id: &str,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Vec<Event> {
    let mut events = Vec::new();
    for promise in state.promises_by_agent(agent_id) {
        if within(promise.timestamp, start, end) {
            events.push(Event::Promise(promise.clone()));
        }
        events.extend(
            state
                .deliveries_by_promise(&promise.id)
                .into_iter()
                .filter(|d| within(d.timestamp, start, end))
                .map(|d| Event::Delivery(d.clone())),
        );
        events.extend(
            state
                .recourses_by_promise(&promise.id)
                .into_iter()
                .filter(|r| within(r.timestamp, start, end))
                .map(|r| Event::Recourse(r.clone())),
        );
    }
    events.sort_by(|a, b| a.timestamp().cmp(&b.timestamp()).then_with(|| a.id().cmp(b.id())));
    events
}

/// Outcome counts over the agent's promises made in `[now - window_days, now]`.
/// Deliveries and recourses count regardless of when they were recorded.
pub fn statistics_at(
    state: &LedgerState,
    agent_id: &str,
    window_days: i64,
    now: DateTime<Utc>,
) -> AgentStatistics {
    let period_start = window_start(now, window_days);
    let promises = state.agent_promises_in_range(agent_id, period_start, now);

    let mut deliveries = OutcomeCounts::default();
    let mut promises_with_delivery = 0;
    let mut promises_with_recourse = 0;
    let mut total_recourses = 0;
    for promise in &promises {
        let delivered = state.deliveries_by_promise(&promise.id);
        if !delivered.is_empty() {
            promises_with_delivery += 1;
        }
        for delivery in delivered {
            deliveries.record(delivery.outcome);
        }

        let recourses = state.recourses_by_promise(&promise.id).len();
        if recourses > 0 {
            promises_with_recourse += 1;
        }
        total_recourses += recourses;
    }

    let delivery_rate = if deliveries.total == 0 {
        0.0
    } else {
        deliveries.delivered as f64 / deliveries.total as f64
    };

    AgentStatistics {
        agent_id: agent_id.to_string(),
        window_days,
        period_start,
        period_end: now,
        total_promises: promises.len(),
        promises_with_delivery,
        promises_with_recourse,
        deliveries,
        total_recourses,
        delivery_rate,
    }
}
