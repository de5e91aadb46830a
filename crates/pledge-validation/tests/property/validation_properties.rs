use pledge_core::events::{DependencyEvent, Event};
use pledge_core::models::TrustSnapshot;
use pledge_core::IEventValidator;
use pledge_validation::{EventValidator, MetricsGate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn unit_interval_dependencies_are_accepted(w in 0.0f64..=1.0, f in 0.0f64..=1.0, fb in 0.0f64..=1.0) {
        let event = Event::Dependency(DependencyEvent::new("wf", "dep", w, f, fb));
        prop_assert!(EventValidator::default().validate_event(&event).is_valid);
    }

    #[test]
    fn out_of_range_weight_is_always_blocked(w in prop_oneof![-1e6f64..-1e-9, 1.000_001f64..1e6]) {
        let event = Event::Dependency(DependencyEvent::new("wf", "dep", w, 0.5, 0.5));
        prop_assert!(!EventValidator::default().validate_event(&event).is_valid);
    }

    #[test]
    fn snapshot_in_range_has_no_issues(pdr in 0.0f64..=1.0, mdr in 0.0f64..=1.0, chain in 0.0f64..=1.0) {
        let snapshot = TrustSnapshot {
            pdr: Some(pdr),
            mdr: Some(mdr),
            chain_score: Some(chain),
            ..Default::default()
        };
        prop_assert!(MetricsGate.validate_snapshot(&snapshot).is_empty());
    }
}
