//! Year-over-year inflation from a descending monthly index series.

/// Compute YoY percentage change over a descending-by-date series.
///
/// Pairs index `i` with index `i + 12`, twelve positions later in the list
/// and so roughly twelve months earlier. Assumes gap-free monthly data; a
/// missing month shifts every pairing after it. Returns `(index, rate)` for
/// each position where both values are numeric; positions without a
/// twelve-ahead partner are excluded.
pub fn yoy_rates(values: &[Option<f64>]) -> Vec<(usize, f64)> {
    let mut out = Vec::new();
    if values.len() <= 12 {
        return out;
    }
    for i in 0..values.len() - 12 {
        if let (Some(current), Some(year_ago)) = (values[i], values[i + 12]) {
            let rate = (current - year_ago) / year_ago * 100.0;
            out.push((i, round2(rate)));
        }
    }
    out
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
