/// Dispatch of binary operators on evaluated operands.
pub mod core;

/// Arithmetic on two numbers.
pub mod scalar;

/// Exponentiation.
pub mod power;

/// The comparison inside an `if` condition.
pub mod comparison;
