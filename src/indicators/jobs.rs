//! Jobs-report period handling and ordering.

/// Strip the one-letter period prefix from a BLS period code: `M03` -> `03`.
pub fn month_number(period: &str) -> String {
    period
        .strip_prefix('M')
        .unwrap_or(period)
        .to_string()
}

/// Sort key for descending `(year, period)` ordering. Unparseable fields
/// sort as zero rather than failing.
pub fn sort_key(year: &str, period: &str) -> (i64, i64) {
    (
        year.parse().unwrap_or(0),
        period.parse().unwrap_or(0),
    )
}
