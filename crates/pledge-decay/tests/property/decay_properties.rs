use pledge_decay::{decay_weight, DecayCurve};
use proptest::prelude::*;

fn arb_curve() -> impl Strategy<Value = DecayCurve> {
    prop_oneof![
        Just(DecayCurve::Linear),
        Just(DecayCurve::Exponential),
        Just(DecayCurve::Logarithmic),
    ]
}

proptest! {
    #[test]
    fn weight_in_unit_interval(
        age in -100.0f64..1000.0,
        max in 0.001f64..1000.0,
        curve in arb_curve(),
    ) {
        let w = decay_weight(age, max, curve);
        prop_assert!((0.0..=1.0).contains(&w), "weight {w} out of range");
    }

    #[test]
    fn monotonically_non_increasing(
        a in 0.0f64..500.0,
        b in 0.0f64..500.0,
        max in 0.5f64..500.0,
        curve in arb_curve(),
    ) {
        let (young, old) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(decay_weight(young, max, curve) >= decay_weight(old, max, curve));
    }

    #[test]
    fn zero_at_or_past_horizon(
        max in 0.001f64..1000.0,
        extra in 0.0f64..1000.0,
        curve in arb_curve(),
    ) {
        prop_assert_eq!(decay_weight(max + extra, max, curve), 0.0);
    }
}
