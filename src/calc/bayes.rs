//! Positive predictive value via Bayes' theorem.
//!
//! P(disease | positive) = P(pos | disease) P(disease) / P(pos)
//!
//! expanded over the two disease states:
//!
//! ```text
//! ppv = sens * prev / (sens * prev + (1 - spec) * (1 - prev))
//! ```

/// Positive predictive value for a test with the given characteristics.
///
/// All three inputs are fractions in [0, 1]; the range is not enforced.
/// Returns `None` when the denominator is exactly zero (no positive test
/// results are possible, e.g. zero prevalence with perfect specificity).
/// Non-finite inputs flow through arithmetic unchecked; finiteness is a
/// display concern, checked at format time.
pub fn ppv(sensitivity: f64, specificity: f64, prevalence: f64) -> Option<f64> {
    let true_pos = sensitivity * prevalence;
    let false_pos = (1.0 - specificity) * (1.0 - prevalence);
    let denom = true_pos + false_pos;
    if denom == 0.0 {
        return None;
    }
    Some(true_pos / denom)
}
