//! Display formatting for the result panel and count cards.
//!
//! Finiteness is checked here, at the last step before rendering, never in
//! the calculation layer.

/// Marker shown wherever a value has no numeric rendering.
pub const NOT_APPLICABLE: &str = "n/a";

/// PPV as a percentage string with exactly two decimals, or `n/a` when the
/// evaluator returned the undefined sentinel or a non-finite value leaked
/// through the arithmetic.
pub fn format_ppv(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}%", v * 100.0),
        _ => NOT_APPLICABLE.to_string(),
    }
}

/// Raw percentage with exactly one decimal, or `n/a` for non-finite input.
pub fn format_pct(pct: f64) -> String {
    if pct.is_finite() {
        format!("{:.1}", pct)
    } else {
        NOT_APPLICABLE.to_string()
    }
}

/// Integer count with thousands grouping, e.g. `10,000`.
pub fn format_count(count: i64) -> String {
    let digits = count.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if count < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
