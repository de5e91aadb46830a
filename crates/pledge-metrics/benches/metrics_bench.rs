use std::sync::Arc;

use chrono::{Duration, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

use pledge_core::traits::IMetricsEngine;
use pledge_core::{
    CorrectionStatus, DeliveryEvent, DeliveryOutcome, DependencyEvent, DistortionType, ImpactTier,
    MemoryDistortionEvent, PromiseEvent,
};
use pledge_ledger::EventStore;
use pledge_metrics::MetricsEngine;

/// 5K promises for one agent over 90 days plus dependencies and distortions.
fn build_store() -> Arc<EventStore> {
    let store = Arc::new(EventStore::new());
    let now = Utc::now();
    let tiers = [ImpactTier::Critical, ImpactTier::High, ImpactTier::Medium, ImpactTier::Low];
    for i in 0..5_000i64 {
        let ts = now - Duration::minutes(i * 25);
        let pid = store
            .add_promise(PromiseEvent::new("agent-bench", "p", tiers[(i % 4) as usize]).at(ts))
            .unwrap();
        let outcome = if i % 7 == 0 { DeliveryOutcome::Failed } else { DeliveryOutcome::Delivered };
        store.add_delivery(DeliveryEvent::new(pid, outcome).at(ts)).unwrap();
        if i % 10 == 0 {
            store
                .add_dependency(DependencyEvent::new("wf", "d", 0.5, 0.1, 0.5).at(ts))
                .unwrap();
            store
                .add_memory_distortion(
                    MemoryDistortionEvent::new("s", DistortionType::TemporalDrift, CorrectionStatus::Corrected)
                        .at(ts),
                )
                .unwrap();
        }
    }
    store
}

fn bench_compute_all(c: &mut Criterion) {
    let engine = MetricsEngine::new(build_store());
    let now = Utc::now();
    c.bench_function("compute_all_5k_promises", |b| {
        b.iter(|| engine.compute_all_at(now, "agent-bench", 90, None).unwrap());
    });
}

criterion_group!(benches, bench_compute_all);
criterion_main!(benches);
