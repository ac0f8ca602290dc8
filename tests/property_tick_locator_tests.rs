use coordsys_rs::core::{AxisRange, NumericTickLocator, normalize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn tick_count_never_exceeds_maximum(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        desired in 5usize..=40
    ) {
        let max_ticks = 40;
        let max = min + span;
        let ticks = NumericTickLocator::new(max, min, desired, max_ticks)
            .locate()
            .expect("finite range yields ticks");

        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks.len() <= max_ticks);
    }

    #[test]
    fn ticks_are_finite_and_strictly_increasing(
        min in -1_000.0f64..1_000.0,
        span in 0.01f64..10_000.0,
        desired in 5usize..=20
    ) {
        let ticks = NumericTickLocator::new(min + span, min, desired, 40)
            .locate()
            .expect("finite range yields ticks");

        prop_assert!(ticks.iter().all(f64::is_finite));
        prop_assert!(ticks.values().windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn normalized_ranges_are_strictly_ordered(
        a in -1_000_000.0f64..1_000_000.0,
        b in -1_000_000.0f64..1_000_000.0
    ) {
        let (max, min) = normalize(a, b);
        prop_assert!(max > min);
        prop_assert!(AxisRange::normalized(a, b).span() > 0.0);
    }

    #[test]
    fn reversed_pair_matches_swapped_pair(
        a in -1_000_000.0f64..1_000_000.0,
        b in -1_000_000.0f64..1_000_000.0
    ) {
        prop_assume!(a != b);
        prop_assert_eq!(normalize(a, b), normalize(b, a));
    }

    #[test]
    fn repeated_locates_are_identical(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        desired in 0usize..=40,
        max_ticks in 1usize..=40
    ) {
        let locator = NumericTickLocator::new(min + span, min, desired, max_ticks);
        prop_assert_eq!(locator.locate(), locator.locate());
    }

    #[test]
    fn equal_values_are_widened(value in -1_000_000.0f64..1_000_000.0) {
        let (max, min) = normalize(value, value);
        prop_assert!(max > min);
        prop_assert!(value >= min && value <= max);
    }
}
