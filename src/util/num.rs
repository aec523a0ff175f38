/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Relative tolerance within which a float counts as an integer.
pub const INTEGRAL_TOLERANCE: f64 = f64::EPSILON;

/// Returns the nearest integer to `value` if `value` is integral within
/// floating-point tolerance.
///
/// The tolerance is relative (`ε · max(1, |value|)`), so results of earlier
/// arithmetic such as `0.1 * 30` still count as integers.
///
/// ## Returns
/// - `Some(rounded)`: `value` rounded to the nearest integer.
/// - `None`: if `value` is non-finite or has a fractional part.
///
/// ## Example
/// ```
/// use sciexpr::util::num::as_integral;
///
/// assert_eq!(as_integral(5.0), Some(5.0));
/// assert_eq!(as_integral(0.1 * 30.0), Some(3.0));
/// assert_eq!(as_integral(2.5), None);
/// assert_eq!(as_integral(f64::NAN), None);
/// ```
#[must_use]
pub fn as_integral(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    let tolerance = INTEGRAL_TOLERANCE * value.abs().max(1.0);
    ((value - rounded).abs() <= tolerance).then_some(rounded)
}

/// Safely converts an integral `f64` to `u64`.
///
/// ## Returns
/// - `Some(u64)`: if `value` is a non-negative integer no larger than
///   [`MAX_SAFE_U64_INT`].
/// - `None`: for negative, fractional, non-finite or too large values.
///
/// ## Example
/// ```
/// use sciexpr::util::num::{MAX_SAFE_U64_INT, f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(42.0), Some(42));
/// assert_eq!(f64_to_u64_checked(-1.0), None);
/// assert_eq!(f64_to_u64_checked(1.5), None);
/// assert_eq!(f64_to_u64_checked(1e300), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_u64_checked(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    if value.fract() != 0.0 {
        return None;
    }
    Some(value as u64)
}

/// Computes `n!` with checked signed 64-bit accumulation.
///
/// ## Returns
/// - `Some(n!)` for `n <= 20`.
/// - `None` once the product leaves the `i64` range (`21!` and above).
///
/// ## Example
/// ```
/// use sciexpr::util::num::factorial;
///
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(5), Some(120));
/// assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
/// assert_eq!(factorial(21), None);
/// ```
#[must_use]
pub fn factorial(n: u64) -> Option<i64> {
    let mut result = 1i64;
    for k in 2..=n {
        result = result.checked_mul(i64::try_from(k).ok()?)?;
    }
    Some(result)
}
