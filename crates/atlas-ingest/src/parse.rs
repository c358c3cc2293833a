//! Numeric coercion helpers.

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerces a year field to an integer.
///
/// Years arrive as `"2000"`, `"2000.0"`, or garbage; numeric values are
/// truncated toward zero, everything else is missing.
pub fn parse_year(value: &str) -> Option<i64> {
    parse_f64(value).map(|year| year as i64)
}
