use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use pledge_core::events::{DeliveryEvent, DeliveryOutcome, Event, ImpactTier, PromiseEvent, RecourseEvent};
use pledge_core::models::ChainTermination;
use pledge_core::thread::{Headers, RawMessage};
use pledge_core::ThreadEntry;
use pledge_ledger::EventStore;
use pledge_provenance::{PromiseProvenance, PromiseStatus, ProvenanceTracker};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
}

fn days_ago(d: i64) -> DateTime<Utc> {
    now() - Duration::days(d)
}

struct Seeded {
    tracker: ProvenanceTracker,
    delivered: String,
    failed: String,
    pending: String,
}

fn seeded() -> Seeded {
    let store = Arc::new(EventStore::new());
    let delivered = store
        .add_promise(PromiseEvent::new("agent-a", "write docs", ImpactTier::Medium).at(days_ago(10)))
        .unwrap();
    let failed = store
        .add_promise(PromiseEvent::new("agent-a", "migrate db", ImpactTier::Critical).at(days_ago(5)))
        .unwrap();
    let pending = store
        .add_promise(PromiseEvent::new("agent-a", "rotate keys", ImpactTier::High).at(days_ago(2)))
        .unwrap();
    store
        .add_promise(PromiseEvent::new("agent-b", "unrelated", ImpactTier::Low).at(days_ago(3)))
        .unwrap();

    store
        .add_delivery(DeliveryEvent::new(&delivered, DeliveryOutcome::Delivered).at(days_ago(9)))
        .unwrap();
    store
        .add_delivery(DeliveryEvent::new(&failed, DeliveryOutcome::Partial).with_amounts(1.0, 4.0).at(days_ago(4)))
        .unwrap();
    store
        .add_delivery(DeliveryEvent::new(&failed, DeliveryOutcome::Failed).at(days_ago(3)))
        .unwrap();
    store
        .add_recourse(RecourseEvent::new(&failed, "rollback", "restored from backup").at(days_ago(3)))
        .unwrap();

    Seeded {
        tracker: ProvenanceTracker::new(store),
        delivered,
        failed,
        pending,
    }
}

#[test]
fn unknown_promise_is_not_found() {
    let s = seeded();
    let provenance = s.tracker.promise_provenance("nope").unwrap();
    assert_eq!(
        provenance,
        PromiseProvenance::NotFound {
            promise_id: "nope".into()
        }
    );
}

#[test]
fn latest_delivery_sets_outcome() {
    let s = seeded();
    match s.tracker.promise_provenance(&s.failed).unwrap() {
        PromiseProvenance::Found {
            status,
            outcome,
            deliveries,
            recourses,
            ..
        } => {
            assert_eq!(status, PromiseStatus::Completed);
            assert_eq!(outcome, Some(DeliveryOutcome::Failed));
            assert_eq!(deliveries.len(), 2);
            assert_eq!(recourses.len(), 1);
        }
        other => panic!("expected found, got {other:?}"),
    }
}

#[test]
fn promise_without_delivery_is_pending() {
    let s = seeded();
    let provenance = s.tracker.promise_provenance(&s.pending).unwrap();
    assert_eq!(provenance.status(), Some(PromiseStatus::Pending));
    assert!(s.tracker.promise_provenance(&s.delivered).unwrap().is_found());
}

#[test]
fn trace_respects_bounds() {
    let s = seeded();
    assert_eq!(s.tracker.trace_agent_promises("agent-a", None, None).unwrap().len(), 3);
    let recent = s
        .tracker
        .trace_agent_promises("agent-a", Some(days_ago(6)), Some(days_ago(4)))
        .unwrap();
    assert_eq!(recent.len(), 1);
    assert!(s.tracker.trace_agent_promises("ghost", None, None).unwrap().is_empty());
}

#[test]
fn timeline_is_chronological_and_scoped_to_agent() {
    let s = seeded();
    let events = s.tracker.timeline("agent-a", None, None).unwrap();
    assert_eq!(events.len(), 3 + 3 + 1);
    assert!(events.windows(2).all(|w| w[0].timestamp() <= w[1].timestamp()));
    assert!(events.iter().all(|e| match e {
        Event::Promise(p) => p.agent_id == "agent-a",
        _ => true,
    }));

    let late = s.tracker.timeline("agent-a", Some(days_ago(3)), None).unwrap();
    assert_eq!(late.len(), 3);
}

#[test]
fn statistics_count_outcomes() {
    let s = seeded();
    let stats = s.tracker.statistics_at("agent-a", 90, now()).unwrap();
    assert_eq!(stats.total_promises, 3);
    assert_eq!(stats.promises_with_delivery, 2);
    assert_eq!(stats.promises_with_recourse, 1);
    assert_eq!(stats.deliveries.total, 3);
    assert_eq!(stats.deliveries.delivered, 1);
    assert_eq!(stats.deliveries.partial, 1);
    assert_eq!(stats.deliveries.failed, 1);
    assert!((stats.delivery_rate - 1.0 / 3.0).abs() < 1e-12);

    let narrow = s.tracker.statistics_at("agent-a", 1, now()).unwrap();
    assert_eq!(narrow.total_promises, 0);
    assert_eq!(narrow.delivery_rate, 0.0);
}

#[test]
fn statistics_survive_extreme_windows() {
    let s = seeded();
    assert_eq!(s.tracker.statistics_at("agent-a", i64::MAX, now()).unwrap().total_promises, 3);
    assert_eq!(s.tracker.statistics_at("agent-a", -5, now()).unwrap().total_promises, 0);
}

fn hop(id: &str, parent: Option<&str>, minute: i64, signed: bool) -> ThreadEntry {
    let headers = Headers::new();
    let entry = ThreadEntry::create(RawMessage {
        message_id: id.into(),
        from_addr: "a@x.io".into(),
        to_addr: "b@x.io".into(),
        timestamp: now() + Duration::minutes(minute),
        signer: "s.x.io".into(),
        body: id,
        headers: &headers,
        in_reply_to: parent.map(str::to_string),
        references: Vec::new(),
    });
    if signed {
        entry.extend_chain(format!("sig-{id}"))
    } else {
        entry
    }
}

#[test]
fn intact_chain_verifies() {
    let store = Arc::new(EventStore::new());
    store.add_thread_entry(hop("<1@x.io>", None, 0, false)).unwrap();
    store.add_thread_entry(hop("<2@x.io>", Some("<1@x.io>"), 1, true)).unwrap();
    store.add_thread_entry(hop("<3@x.io>", Some("<2@x.io>"), 2, true)).unwrap();

    let v = ProvenanceTracker::new(store).verify_thread_chain("<3@x.io>").unwrap();
    assert!(v.found);
    assert!(v.verified);
    assert_eq!(v.chain_length, 3);
    assert_eq!(v.termination, ChainTermination::Root);
    assert_eq!(v.total_issues(), 0);
}

#[test]
fn unsigned_hop_and_clock_skew_are_reported() {
    let store = Arc::new(EventStore::new());
    store.add_thread_entry(hop("<1@x.io>", None, 5, true)).unwrap();
    store.add_thread_entry(hop("<2@x.io>", Some("<1@x.io>"), 5, false)).unwrap();

    let v = ProvenanceTracker::new(store).verify_thread_chain("<2@x.io>").unwrap();
    assert!(v.found);
    assert!(!v.verified);
    assert_eq!(v.signature_gaps.len(), 1);
    assert_eq!(v.signature_gaps[0].position, 1);
    assert_eq!(v.timestamp_issues.len(), 1);
    assert!(v.gaps.is_empty());
}

#[test]
fn truncated_chain_is_not_verified() {
    let store = Arc::new(EventStore::new());
    store.add_thread_entry(hop("<2@x.io>", Some("<1@x.io>"), 1, true)).unwrap();

    let v = ProvenanceTracker::new(store).verify_thread_chain("<2@x.io>").unwrap();
    assert!(v.found);
    assert!(!v.verified);
    assert!(matches!(v.termination, ChainTermination::MissingParent { .. }));
}

#[test]
fn missing_chain_is_not_found() {
    let v = ProvenanceTracker::new(Arc::new(EventStore::new()))
        .verify_thread_chain("<none@x.io>")
        .unwrap();
    assert!(!v.found);
    assert!(!v.verified);
    assert_eq!(v.chain_length, 0);
}

#[test]
fn provenance_serializes_with_result_tag() {
    let s = seeded();
    let json = serde_json::to_value(s.tracker.promise_provenance(&s.pending).unwrap()).unwrap();
    assert_eq!(json["result"], "found");
    assert_eq!(json["status"], "pending");
    assert!(json["outcome"].is_null());
}
