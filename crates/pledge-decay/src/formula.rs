use std::f64::consts::LN_2;

use pledge_core::config::DecayCurve;

/// Weight for an event `age_days` old under `curve`.
///
/// ```text
/// age ≥ max            → 0
/// linear               → 1 − age / max
/// exponential          → exp(−ln2 · age / (max / 2))
/// logarithmic, age = 0 → 1
/// logarithmic          → 1 − ln(1 + age) / ln(1 + max)
/// ```
///
/// Negative ages count as 0. A non-positive or non-finite `max_age_days`
/// yields 0. Result is clamped to [0.0, 1.0].
pub fn decay_weight(age_days: f64, max_age_days: f64, curve: DecayCurve) -> f64 {
    if !(max_age_days.is_finite() && max_age_days > 0.0) {
        return 0.0;
    }
    // f64::max drops NaN, so a NaN age is treated as fresh.
    let age = age_days.max(0.0);
    if age >= max_age_days {
        return 0.0;
    }

    let weight = match curve {
        DecayCurve::Linear => 1.0 - age / max_age_days,
        DecayCurve::Exponential => {
            let half_life = max_age_days / 2.0;
            (-LN_2 * age / half_life).exp()
        }
        DecayCurve::Logarithmic => {
            if age == 0.0 {
                1.0
            } else {
                1.0 - (1.0 + age).ln() / (1.0 + max_age_days).ln()
            }
        }
    };

    weight.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn fresh_events_weigh_one() {
        for curve in [DecayCurve::Linear, DecayCurve::Exponential, DecayCurve::Logarithmic] {
            assert!((decay_weight(0.0, 90.0, curve) - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn expired_events_weigh_zero() {
        for curve in [DecayCurve::Linear, DecayCurve::Exponential, DecayCurve::Logarithmic] {
            assert_eq!(decay_weight(90.0, 90.0, curve), 0.0);
            assert_eq!(decay_weight(400.0, 90.0, curve), 0.0);
        }
    }

    #[test]
    fn linear_midpoint() {
        assert!((decay_weight(45.0, 90.0, DecayCurve::Linear) - 0.5).abs() < EPS);
    }

    #[test]
    fn exponential_half_life_is_half_of_max() {
        assert!((decay_weight(45.0, 90.0, DecayCurve::Exponential) - 0.5).abs() < EPS);
        assert!((decay_weight(22.5, 90.0, DecayCurve::Exponential) - 0.5f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn logarithmic_matches_formula() {
        let expected = 1.0 - 11.0f64.ln() / 91.0f64.ln();
        assert!((decay_weight(10.0, 90.0, DecayCurve::Logarithmic) - expected).abs() < EPS);
    }

    #[test]
    fn negative_age_is_fresh() {
        assert_eq!(decay_weight(-3.0, 90.0, DecayCurve::Linear), 1.0);
    }

    #[test]
    fn degenerate_max_yields_zero() {
        assert_eq!(decay_weight(1.0, 0.0, DecayCurve::Linear), 0.0);
        assert_eq!(decay_weight(1.0, f64::NAN, DecayCurve::Exponential), 0.0);
    }
}
