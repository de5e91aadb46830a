use chrono::{Duration, TimeZone, Utc};
use pledge_core::{ImpactTier, PromiseEvent};
use pledge_ledger::EventStore;
use proptest::prelude::*;

proptest! {
    #[test]
    fn range_query_matches_linear_filter(
        offsets in prop::collection::vec(0i64..1000, 0..40),
        lo in 0i64..1000,
        span in 0i64..1000,
    ) {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let store = EventStore::new();
        for (i, off) in offsets.iter().enumerate() {
            let agent = if i % 2 == 0 { "even" } else { "odd" };
            store
                .add_promise(PromiseEvent::new(agent, "p", ImpactTier::Low).at(base + Duration::hours(*off)))
                .unwrap();
        }
        let start = base + Duration::hours(lo);
        let end = start + Duration::hours(span);

        let snapshot = store.snapshot().unwrap();
        let hits = snapshot.promises_in_range(start, end);
        let expected = offsets
            .iter()
            .filter(|off| {
                let ts = base + Duration::hours(**off);
                ts >= start && ts <= end
            })
            .count();
        prop_assert_eq!(hits.len(), expected);
        prop_assert!(hits.windows(2).all(|w| (w[0].timestamp, &w[0].id) <= (w[1].timestamp, &w[1].id)));

        let per_agent = snapshot.agent_promises_in_range("even", start, end).len()
            + snapshot.agent_promises_in_range("odd", start, end).len();
        prop_assert_eq!(per_agent, expected);
    }
}
