//! Display formatting for computed results

/// Fractional digits kept when a result is displayed
pub const DEFAULT_PRECISION: usize = 7;

/// Formats a computed result for the display.
///
/// The value is rounded to `precision` fractional digits and re-parsed, so
/// rounding artifacts and trailing zeros disappear: `1/3` shows as
/// `0.3333333` and `4/2` as `2`. Negative zero shows as `0`.
#[must_use]
pub fn format_result(value: f64, precision: usize) -> String {
    let rounded = round_to(value, precision);
    if rounded == 0.0 {
        return "0".to_string();
    }
    rounded.to_string()
}

/// Rounds `value` to `precision` fractional digits via its decimal form.
#[must_use]
pub fn round_to(value: f64, precision: usize) -> f64 {
    format!("{:.*}", precision, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// Numeric value of a display string.
///
/// In-progress literals like `"5."` parse as `5`.
#[must_use]
pub fn parse_operand(display: &str) -> f64 {
    display.parse::<f64>().unwrap_or(0.0)
}
