//! Projection of the three test characteristics onto a hypothetical
//! population, split into the four confusion-matrix cells.

/// Population size used when nothing else is configured.
pub const DEFAULT_POPULATION: i64 = 10_000;

/// Confusion-matrix cell counts over a projected population.
///
/// Invariant: the four cells sum exactly to the population they were
/// projected from, and `true_positives + false_negatives` equals the
/// rounded diseased count exactly. Each group's second cell is the exact
/// complement of the first, never independently rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionCells {
    pub true_positives: i64,
    pub false_positives: i64,
    pub true_negatives: i64,
    pub false_negatives: i64,
}

impl ConfusionCells {
    pub fn total(&self) -> i64 {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }
}

/// Project test characteristics onto `population` individuals.
///
/// Inputs are fractions in [0, 1]; the range is not enforced. Rounding is
/// half-away-from-zero (`f64::round`). Returns `None` when any input is
/// non-finite, since a count cannot be derived from NaN.
pub fn confusion_cells(
    sensitivity: f64,
    specificity: f64,
    prevalence: f64,
    population: i64,
) -> Option<ConfusionCells> {
    if !(sensitivity.is_finite() && specificity.is_finite() && prevalence.is_finite()) {
        return None;
    }

    let diseased = (population as f64 * prevalence).round() as i64;
    let healthy = population - diseased;

    let true_positives = (diseased as f64 * sensitivity).round() as i64;
    let false_negatives = diseased - true_positives;

    let true_negatives = (healthy as f64 * specificity).round() as i64;
    let false_positives = healthy - true_negatives;

    Some(ConfusionCells {
        true_positives,
        false_positives,
        true_negatives,
        false_negatives,
    })
}
