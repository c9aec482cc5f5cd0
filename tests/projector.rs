use ppvcalc::calc::{confusion_cells, DEFAULT_POPULATION};
use ppvcalc::format::format_count;

#[test]
fn default_parameters_split() {
    let cells = confusion_cells(0.90, 0.95, 0.05, DEFAULT_POPULATION).unwrap();
    // diseased = 500, healthy = 9500.
    assert_eq!(cells.true_positives, 450);
    assert_eq!(cells.false_negatives, 50);
    assert_eq!(cells.true_negatives, 9_025);
    assert_eq!(cells.false_positives, 475);
    assert_eq!(cells.total(), DEFAULT_POPULATION);
}

#[test]
fn perfect_test_even_prevalence() {
    let cells = confusion_cells(1.0, 1.0, 0.5, 10_000).unwrap();
    assert_eq!(cells.true_positives, 5_000);
    assert_eq!(cells.false_negatives, 0);
    assert_eq!(cells.true_negatives, 5_000);
    assert_eq!(cells.false_positives, 0);
}

#[test]
fn groups_are_exact_complements() {
    // Awkward fractions: each group total must still be exact.
    for population in [1, 7, 99, 10_000, 1_000_001] {
        for prevalence in [0.0, 0.013, 0.3333, 0.5, 0.9999, 1.0] {
            let cells = confusion_cells(0.73, 0.81, prevalence, population).unwrap();
            let diseased = (population as f64 * prevalence).round() as i64;
            assert_eq!(
                cells.true_positives + cells.false_negatives,
                diseased,
                "diseased group at N={} prev={}",
                population,
                prevalence
            );
            assert_eq!(
                cells.total(),
                population,
                "grand total at N={} prev={}",
                population,
                prevalence
            );
        }
    }
}

#[test]
fn zero_population() {
    let cells = confusion_cells(0.9, 0.95, 0.05, 0).unwrap();
    assert_eq!(cells.total(), 0);
}

#[test]
fn non_finite_inputs_yield_none() {
    assert_eq!(confusion_cells(f64::NAN, 0.95, 0.05, 10_000), None);
    assert_eq!(confusion_cells(0.9, f64::INFINITY, 0.05, 10_000), None);
    assert_eq!(confusion_cells(0.9, 0.95, f64::NEG_INFINITY, 10_000), None);
}

#[test]
fn counts_render_with_grouping() {
    let cells = confusion_cells(0.90, 0.95, 0.05, DEFAULT_POPULATION).unwrap();
    assert_eq!(format_count(cells.true_negatives), "9,025");
    assert_eq!(format_count(cells.total()), "10,000");
}
