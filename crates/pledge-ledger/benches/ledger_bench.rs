use chrono::{Duration, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

use pledge_core::{DeliveryEvent, DeliveryOutcome, ImpactTier, PromiseEvent};
use pledge_ledger::EventStore;

/// 10K promises across 100 agents, each with one delivery.
fn build_store() -> EventStore {
    let store = EventStore::new();
    let now = Utc::now();
    for i in 0..10_000 {
        let promise = PromiseEvent::new(format!("agent-{}", i % 100), "bench", ImpactTier::Medium)
            .at(now - Duration::minutes(i));
        let pid = store.add_promise(promise).unwrap();
        store
            .add_delivery(DeliveryEvent::new(pid, DeliveryOutcome::Delivered).at(now))
            .unwrap();
    }
    store
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("append_1k_promises", |b| {
        b.iter(|| {
            let store = EventStore::new();
            for i in 0..1_000 {
                store
                    .add_promise(PromiseEvent::new(format!("agent-{}", i % 10), "x", ImpactTier::Low))
                    .unwrap();
            }
        });
    });
}

fn bench_queries(c: &mut Criterion) {
    let store = build_store();
    let now = Utc::now();
    c.bench_function("promises_by_agent_10k", |b| {
        b.iter(|| store.promises_by_agent("agent-42").unwrap());
    });
    c.bench_function("events_in_range_1d_10k", |b| {
        b.iter(|| store.events_in_range(now - Duration::days(1), now).unwrap());
    });
}

criterion_group!(benches, bench_append, bench_queries);
criterion_main!(benches);
