/// Arithmetic builtins implemented directly on `f64`.
///
/// Contains `sin`, `cos`, `tan`, `sqrt`, `exp`, `abs`, `ceil` and `floor`.
pub mod builtin;
/// Logarithm function implementation.
///
/// Supports the natural logarithm and logarithms to an arbitrary base.
pub mod log;
/// The `round` function implementation.
///
/// Rounds half to even, optionally to a number of decimal digits.
pub mod round;
/// Random builtins: `randint`, `random` and `choice`.
///
/// All of them draw from the session's random source.
pub mod random;
/// The `now` function implementation.
pub mod now;
/// The `input` function implementation and the shared line reader used by
/// the `input` statement.
pub mod input;

/// The builtin table and user function calls.
pub mod core;
