/// Numeric conversion helpers.
///
/// Every number in the language is an `f64`. The few builtins that need an
/// integer (random bounds, rounding digits) use these helpers to convert
/// without silent truncation, reporting a domain error instead.
pub mod num;
