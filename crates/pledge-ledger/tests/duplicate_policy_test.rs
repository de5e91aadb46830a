use chrono::{Duration, Utc};
use pledge_core::config::{DuplicatePolicy, LedgerConfig};
use pledge_core::errors::{LedgerError, PledgeError};
use pledge_core::{DeliveryEvent, DeliveryOutcome, ImpactTier, PromiseEvent, RecordKind};
use pledge_ledger::EventStore;

fn overwrite_store() -> EventStore {
    EventStore::with_config(LedgerConfig {
        duplicate_policy: DuplicatePolicy::Overwrite,
        ..Default::default()
    })
}

#[test]
fn duplicate_is_rejected_by_default() {
    let store = EventStore::new();
    let promise = PromiseEvent::new("agent-a", "first", ImpactTier::High);
    store.add_promise(promise.clone()).unwrap();

    let mut impostor = promise.clone();
    impostor.agent_id = "agent-b".into();
    let err = store.add_promise(impostor).unwrap_err();
    match err {
        PledgeError::LedgerError(LedgerError::DuplicateId { kind, id }) => {
            assert_eq!(kind, RecordKind::Promise);
            assert_eq!(id, promise.id);
        }
        other => panic!("unexpected error: {other}"),
    }

    // Indices unchanged.
    assert_eq!(store.promises_by_agent("agent-a").unwrap().len(), 1);
    assert!(store.promises_by_agent("agent-b").unwrap().is_empty());
    assert_eq!(store.counts().unwrap().promises, 1);
}

#[test]
fn overwrite_reindexes_replaced_record() {
    let store = overwrite_store();
    let promise = PromiseEvent::new("agent-a", "first", ImpactTier::High);
    store.add_promise(promise.clone()).unwrap();

    let mut moved = promise.clone();
    moved.agent_id = "agent-b".into();
    moved.timestamp = promise.timestamp + Duration::hours(1);
    store.add_promise(moved).unwrap();

    assert!(store.promises_by_agent("agent-a").unwrap().is_empty());
    let b = store.promises_by_agent("agent-b").unwrap();
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].id, promise.id);
    assert_eq!(store.counts().unwrap().promises, 1);

    let snapshot = store.snapshot().unwrap();
    let in_range = snapshot.promises_in_range(promise.timestamp, promise.timestamp);
    assert!(in_range.is_empty(), "stale time index entry survived overwrite");
}

#[test]
fn overwrite_moves_delivery_between_promises() {
    let store = overwrite_store();
    let delivery = DeliveryEvent::new("promise-1", DeliveryOutcome::Failed);
    store.add_delivery(delivery.clone()).unwrap();

    let mut retargeted = delivery;
    retargeted.promise_id = "promise-2".into();
    store.add_delivery(retargeted).unwrap();

    assert!(store.deliveries_by_promise("promise-1").unwrap().is_empty());
    assert_eq!(store.deliveries_by_promise("promise-2").unwrap().len(), 1);
}

#[test]
fn empty_id_is_rejected_under_any_policy() {
    let mut promise = PromiseEvent::new("agent-a", "x", ImpactTier::Low).at(Utc::now());
    promise.id.clear();
    for store in [EventStore::new(), overwrite_store()] {
        let err = store.add_promise(promise.clone()).unwrap_err();
        assert!(matches!(
            err,
            PledgeError::LedgerError(LedgerError::EmptyId { .. })
        ));
    }
}
