use ppvcalc::calc::ppv;
use ppvcalc::format::format_ppv;

#[test]
fn textbook_parameters() {
    // sens 90%, spec 95%, prev 5%: tp = 0.045, fp = 0.0475.
    let value = ppv(0.90, 0.95, 0.05).expect("denominator is positive");
    assert!((value - 0.045 / 0.0925).abs() < 1e-12);
    assert_eq!(format_ppv(Some(value)), "48.65%");
}

#[test]
fn zero_denominator_yields_sentinel() {
    // prev 0% and spec 100%: no true or false positives are possible.
    assert_eq!(ppv(0.90, 1.0, 0.0), None);
    assert_eq!(format_ppv(ppv(0.90, 1.0, 0.0)), "n/a");
}

#[test]
fn coin_flip_test_at_even_prevalence() {
    let value = ppv(0.5, 0.5, 0.5).expect("denominator is 0.5");
    assert!((value - 0.5).abs() < 1e-12);
    assert_eq!(format_ppv(Some(value)), "50.00%");
}

#[test]
fn perfect_test_is_certain() {
    let value = ppv(1.0, 1.0, 0.5).expect("denominator is 0.5");
    assert_eq!(value, 1.0);
    assert_eq!(format_ppv(Some(value)), "100.00%");
}

#[test]
fn increasing_in_prevalence_when_test_is_informative() {
    // sens + spec > 1 fixed; PPV must rise strictly with prevalence.
    let mut last = ppv(0.9, 0.95, 0.001).unwrap();
    for i in 1..=99 {
        let prevalence = f64::from(i) / 100.0;
        let value = ppv(0.9, 0.95, prevalence).unwrap();
        assert!(
            value > last,
            "ppv not increasing at prevalence {}: {} <= {}",
            prevalence,
            value,
            last
        );
        last = value;
    }
}

#[test]
fn nan_input_reaches_formatter_as_na() {
    // Compute first, format-check last: the evaluator does not reject NaN.
    let value = ppv(f64::NAN, 0.95, 0.05);
    assert!(value.unwrap().is_nan());
    assert_eq!(format_ppv(value), "n/a");
}

#[test]
fn zero_numerator_with_positive_denominator_is_zero() {
    // A useless test (sens 0) still has false positives to divide by.
    assert_eq!(ppv(0.0, 0.9, 0.5), Some(0.0));
    // Both terms zero: sentinel, not 0/0.
    assert_eq!(ppv(0.5, 1.0, 0.0), None);
}
