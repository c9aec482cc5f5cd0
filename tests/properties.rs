//! Property tests for the calculation layer.

use ppvcalc::calc::{confusion_cells, ppv};
use proptest::prelude::*;

proptest! {
    /// Cells always partition the population exactly, and the diseased
    /// group matches the rounded prevalence share exactly.
    #[test]
    fn cells_partition_population(
        sensitivity in 0.0f64..=1.0,
        specificity in 0.0f64..=1.0,
        prevalence in 0.0f64..=1.0,
        population in 0i64..=1_000_000,
    ) {
        let cells = confusion_cells(sensitivity, specificity, prevalence, population).unwrap();
        prop_assert_eq!(cells.total(), population);

        let diseased = (population as f64 * prevalence).round() as i64;
        prop_assert_eq!(cells.true_positives + cells.false_negatives, diseased);
        prop_assert_eq!(
            cells.true_negatives + cells.false_positives,
            population - diseased
        );
    }

    /// All four cells are non-negative for in-range inputs.
    #[test]
    fn cells_are_non_negative(
        sensitivity in 0.0f64..=1.0,
        specificity in 0.0f64..=1.0,
        prevalence in 0.0f64..=1.0,
        population in 0i64..=1_000_000,
    ) {
        let cells = confusion_cells(sensitivity, specificity, prevalence, population).unwrap();
        prop_assert!(cells.true_positives >= 0);
        prop_assert!(cells.false_positives >= 0);
        prop_assert!(cells.true_negatives >= 0);
        prop_assert!(cells.false_negatives >= 0);
    }

    /// With an informative test held fixed, PPV is strictly increasing in
    /// prevalence. Perfect specificity is excluded: with no false positives
    /// PPV is constantly 1. Separated sample points keep float comparison
    /// honest.
    #[test]
    fn ppv_monotone_in_prevalence(
        sensitivity in 0.55f64..=1.0,
        specificity in 0.55f64..=0.999,
        lower in 0.01f64..=0.90,
        gap in 0.01f64..=0.09,
    ) {
        let upper = lower + gap;
        let low = ppv(sensitivity, specificity, lower).unwrap();
        let high = ppv(sensitivity, specificity, upper).unwrap();
        prop_assert!(
            high > low,
            "ppv({}) = {} not above ppv({}) = {}",
            upper, high, lower, low
        );
    }

    /// PPV stays within [0, 1] for in-range inputs with a positive
    /// denominator.
    #[test]
    fn ppv_is_a_probability(
        sensitivity in 0.0f64..=1.0,
        specificity in 0.0f64..=1.0,
        prevalence in 0.0f64..=1.0,
    ) {
        if let Some(value) = ppv(sensitivity, specificity, prevalence) {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }
}
