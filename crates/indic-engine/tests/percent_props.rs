//! Property tests for the percentage contract.

use indic_engine::percentage;
use proptest::prelude::*;

proptest! {
    #[test]
    fn missing_denominator_never_produces_a_percentage(value in 0.0f64..1e9) {
        prop_assert_eq!(percentage(value, None), None);
    }

    #[test]
    fn positive_denominator_always_divides(value in 0.0f64..1e9, total in 1.0f64..1e9) {
        let result = percentage(value, Some(total)).expect("computable");
        prop_assert!((result - value / total * 100.0).abs() < 1e-9);
    }

    #[test]
    fn percentage_is_monotone_in_the_numerator(
        small in 0.0f64..1e6,
        extra in 0.0f64..1e6,
        total in 1.0f64..1e9,
    ) {
        let low = percentage(small, Some(total)).expect("computable");
        let high = percentage(small + extra, Some(total)).expect("computable");
        prop_assert!(high >= low);
    }

    #[test]
    fn zero_denominator_never_reports_a_positive_rate(value in 0.0f64..1e9) {
        match percentage(value, Some(0.0)) {
            None => prop_assert_eq!(value, 0.0),
            Some(rate) => prop_assert_eq!(rate, 0.0),
        }
    }
}
