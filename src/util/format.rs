/// Number of decimals shown when the caller does not choose one.
pub const DEFAULT_PRECISION: usize = 10;

/// Values at or above this magnitude are never shown as bare integers.
const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

/// Formats a result for display.
///
/// Integral values below `1e15` in magnitude are printed without a fractional
/// part. Everything else is printed with `precision` decimals, then trailing
/// zeros and a dangling decimal point are trimmed. Negative zero prints as
/// `0`.
///
/// # Example
/// ```
/// use sciexpr::util::format::format_result;
///
/// assert_eq!(format_result(14.0, 10), "14");
/// assert_eq!(format_result(0.5, 10), "0.5");
/// assert_eq!(format_result(1.0 / 3.0, 4), "0.3333");
/// assert_eq!(format_result(-0.0, 10), "0");
/// ```
#[must_use]
pub fn format_result(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 && value.abs() < INTEGER_DISPLAY_LIMIT {
        return format!("{value:.0}");
    }

    let formatted = format!("{value:.precision$}");
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Converts a displayed value to a percentage, as the `%` key does.
///
/// # Example
/// ```
/// use sciexpr::util::format::percent;
///
/// assert_eq!(percent(50.0), 0.5);
/// ```
#[must_use]
pub fn percent(value: f64) -> f64 {
    value / 100.0
}

/// Flips the sign of a displayed value, as the `±` key does. Zero stays
/// zero rather than becoming `-0`.
#[must_use]
pub fn toggle_sign(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { -value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_values_keep_decimal_formatting() {
        assert_eq!(format_result(1e15, 2), "1000000000000000");
        assert_eq!(format_result(2.5e15 + 0.5, 1), "2500000000000000.5");
    }

    #[test]
    fn tiny_negative_values_round_to_zero() {
        assert_eq!(format_result(-1e-12, 10), "0");
    }

    #[test]
    fn trims_only_fractional_zeros() {
        assert_eq!(format_result(120.5, 10), "120.5");
        assert_eq!(format_result(-2.25, 10), "-2.25");
    }

    #[test]
    fn sign_toggle_never_produces_negative_zero() {
        assert!(toggle_sign(0.0).is_sign_positive());
        assert_eq!(toggle_sign(3.0), -3.0);
    }
}
