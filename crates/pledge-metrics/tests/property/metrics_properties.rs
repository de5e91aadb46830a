use chrono::{Duration, TimeZone, Utc};
use pledge_core::thread::{Headers, RawMessage};
use pledge_core::traits::IMetricsEngine;
use pledge_core::{
    CorrectionStatus, DeliveryEvent, DeliveryOutcome, DependencyEvent, DistortionType, ImpactTier,
    MemoryDistortionEvent, PromiseEvent, RecourseEvent, ThreadEntry,
};
use pledge_ledger::EventStore;
use pledge_metrics::{ChainScorer, MetricsEngine, SignerReliability};
use proptest::prelude::*;
use std::sync::Arc;

fn arb_tier() -> impl Strategy<Value = ImpactTier> {
    prop_oneof![
        Just(ImpactTier::Critical),
        Just(ImpactTier::High),
        Just(ImpactTier::Medium),
        Just(ImpactTier::Low),
    ]
}

fn arb_outcome() -> impl Strategy<Value = Option<DeliveryOutcome>> {
    prop_oneof![
        Just(None),
        Just(Some(DeliveryOutcome::Delivered)),
        Just(Some(DeliveryOutcome::Partial)),
        Just(Some(DeliveryOutcome::Failed)),
    ]
}

fn arb_status() -> impl Strategy<Value = CorrectionStatus> {
    prop_oneof![
        Just(CorrectionStatus::Uncorrected),
        Just(CorrectionStatus::Corrected),
        Just(CorrectionStatus::PartiallyCorrected),
    ]
}

fn unit() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

proptest! {
    #[test]
    fn all_scores_in_unit_interval(
        promises in prop::collection::vec((arb_tier(), 0i64..200, arb_outcome(), any::<bool>()), 0..20),
        deps in prop::collection::vec((unit(), unit(), unit(), 0i64..200), 0..10),
        distortions in prop::collection::vec((arb_status(), 0i64..200), 0..10),
        window_days in 1i64..180,
    ) {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let store = Arc::new(EventStore::new());
        for (tier, age, outcome, recourse) in &promises {
            let ts = now - Duration::days(*age);
            let pid = store.add_promise(PromiseEvent::new("agent", "p", *tier).at(ts)).unwrap();
            if let Some(outcome) = outcome {
                store.add_delivery(DeliveryEvent::new(&pid, *outcome).at(ts)).unwrap();
            }
            if *recourse {
                store.add_recourse(RecourseEvent::new(&pid, "fix", "done").at(ts)).unwrap();
            }
        }
        for (w, f, fb, age) in &deps {
            store
                .add_dependency(DependencyEvent::new("wf", "d", *w, *f, *fb).at(now - Duration::days(*age)))
                .unwrap();
        }
        for (status, age) in &distortions {
            store
                .add_memory_distortion(
                    MemoryDistortionEvent::new("s", DistortionType::ContextLoss, *status)
                        .at(now - Duration::days(*age)),
                )
                .unwrap();
        }

        let snapshot = MetricsEngine::new(store)
            .compute_all_at(now, "agent", window_days, None)
            .unwrap();
        for (name, value) in snapshot.scores() {
            prop_assert!((0.0..=1.0).contains(&value), "{} = {}", name, value);
        }
    }

    #[test]
    fn chain_score_monotone_in_referenced_reliability(
        hops in prop::collection::vec((0usize..4, any::<bool>()), 1..12),
        target in 0usize..4,
        low in unit(),
        bump in unit(),
    ) {
        let domains = ["alpha.io", "beta.org", "gamma.net", "delta.dev"];
        let base = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
        let headers = Headers::new();
        let store = EventStore::new();
        for (i, (domain, signed)) in hops.iter().enumerate() {
            let entry = ThreadEntry::create(RawMessage {
                message_id: format!("<m{i}>"),
                from_addr: "a@x.io".into(),
                to_addr: "b@x.io".into(),
                timestamp: base + Duration::minutes(i as i64),
                signer: format!("sel.{}", domains[*domain]),
                body: "b",
                headers: &headers,
                in_reply_to: (i > 0).then(|| format!("<m{}>", i - 1)),
                references: Vec::new(),
            });
            let entry = if *signed { entry.extend_chain("sig") } else { entry };
            store.add_thread_entry(entry).unwrap();
        }
        let leaf = format!("<m{}>", hops.len() - 1);
        let high = (low + bump).min(1.0);

        let state = store.snapshot().unwrap();
        let scorer = ChainScorer::default();
        let lo_map: SignerReliability = [(domains[target].to_string(), low)].into_iter().collect();
        let hi_map: SignerReliability = [(domains[target].to_string(), high)].into_iter().collect();
        prop_assert!(
            scorer.compute_chain_score(&state, &leaf, &hi_map)
                >= scorer.compute_chain_score(&state, &leaf, &lo_map)
        );
    }
}
