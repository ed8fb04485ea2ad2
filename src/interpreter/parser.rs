/// Core parsing entry points.
///
/// Holds the expression entry point and the helpers that tokenize and parse
/// a fragment of a line in one step.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles negation, literals, list literals, variable references, calls and
/// parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels for `^`, `* / %` and `+ -`.
pub mod binary;

/// Condition parsing.
///
/// Parses the clause between `if` and `then`, which may hold at most one
/// comparison operator.
pub mod condition;

/// Utility functions for the parser.
///
/// Provides comma-separated list parsing and error construction shared
/// across the parser.
pub mod utils;

/// Statement classification.
///
/// Recognizes which of the fixed statement forms a line has and cuts it into
/// the fragments the evaluator needs.
pub mod statement;
