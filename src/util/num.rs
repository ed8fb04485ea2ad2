use crate::error::EvalError;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: i64 = 9_007_199_254_740_991;

/// Returns `true` if `value` is finite and has no fractional part.
///
/// ## Example
/// ```
/// use jpp::util::num::is_whole;
///
/// assert!(is_whole(4.0));
/// assert!(!is_whole(4.5));
/// assert!(!is_whole(f64::INFINITY));
/// ```
#[must_use]
pub fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use jpp::util::num::{MAX_SAFE_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!"), Ok(42.0));
/// assert!(i64_to_f64_checked(MAX_SAFE_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts a whole-number `f64` to `i64`.
///
/// Language numbers are all floating point; builtins that need an integer
/// (`randint` bounds, `round` digits) go through here.
///
/// ## Errors
/// Returns `EvalError::DomainError` for non-finite, fractional, or values
/// outside the exactly representable range.
///
/// ## Example
/// ```
/// use jpp::{error::EvalError, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(7.0, 0), Ok(7));
///
/// let err = f64_to_i64_checked(1.5, 3).unwrap_err();
/// assert!(matches!(err, EvalError::DomainError { offset: 3, .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64, offset: usize) -> Result<i64, EvalError> {
    if !is_whole(value) {
        return Err(EvalError::DomainError { details: format!("expected a whole number, found {value}"),
                                            offset });
    }
    if value.abs() > MAX_SAFE_INT as f64 {
        return Err(EvalError::DomainError { details: format!("{value} is too large"),
                                            offset });
    }
    Ok(value as i64)
}
