/// Core evaluation logic and session state.
///
/// Contains the [`Session`](core::Session) type, the expression evaluation
/// entry points, and the [`Outcome`](core::Outcome) of executing a line.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string/list concatenation, exponentiation, and the
/// comparison inside `if` conditions.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Utility functions for evaluation.
///
/// Provides the per-node evaluation helpers and shared argument checks.
pub mod utils;

/// Function evaluation.
///
/// Handles builtin and user-defined function calls, argument checking, and
/// the per-call parameter scope.
pub mod function;

/// Statement execution.
///
/// Runs classified lines: variable binding, printing, input, conditionals,
/// function definitions and the command escape hatch.
pub mod statement;
