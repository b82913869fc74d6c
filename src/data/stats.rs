// ---------------------------------------------------------------------------
// Summary statistics for the value boxes
// ---------------------------------------------------------------------------

/// Shown where a mean is undefined (empty filtered view).
pub const EMPTY_PLACEHOLDER: &str = "—";

/// Arithmetic mean, `None` when the input is empty.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

/// Format a millimetre mean to one decimal place, or the placeholder.
pub fn format_mm(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1} mm"),
        None => EMPTY_PLACEHOLDER.to_string(),
    }
}
