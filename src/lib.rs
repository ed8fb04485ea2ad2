//! # jpp
//!
//! jpp is a small line-oriented scripting language written in Rust.
//! Every line is one statement: a variable binding, `print`, `input`, a
//! one-line `if`, `calc`, or a function definition. Expressions support
//! arithmetic, strings, lists, builtin math, random and time functions, and
//! user functions.
//!
//! The engine never touches the terminal itself. Input, output and unknown
//! commands go through the capabilities in [`interpreter::host`], so a
//! [`Session`](interpreter::evaluator::core::Session) can run against a
//! terminal, a file, or canned test data.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::{Outcome, Session},
    host::{CapturedOutput, ScriptedInput},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement forms, the `Expr` tree and the
/// operator enums. Statements are produced by the parser from one line and
/// carry their embedded expressions as fragments of that line.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source offsets to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, evaluation and
/// dispatch.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Attaches the column of the offending token where one exists.
/// - Tags every reported message with its category and kind.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and host capabilities.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for executing lines and evaluating expressions.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Runs a whole program against canned input and returns what it printed.
///
/// Every line of `source` is executed in a fresh session. Lines requested by
/// `input` statements and `input()` calls are taken from `input_lines` in
/// order. Errors do not stop the run; each one shows up in the output as a
/// tagged line and as an [`Outcome::Failed`].
///
/// # Returns
/// The lines written to the output sink, and one outcome per source line.
///
/// # Examples
/// ```
/// use jpp::run_program;
///
/// let source = "function sq(n) = n ^ 2\ninput name, 'Name? '\nprint name + ' ' + 'squared 4'\ncalc sq(4)";
///
/// let (output, outcomes) = run_program(source, ["Ada"]);
///
/// assert_eq!(output, ["Ada squared 4", "16"]);
/// assert!(outcomes.iter().all(|o| !o.is_failure()));
/// ```
pub fn run_program<I, S>(source: &str, input_lines: I) -> (Vec<String>, Vec<Outcome>)
    where I: IntoIterator<Item = S>,
          S: Into<String>
{
    let output = CapturedOutput::new();
    let mut session = Session::new(ScriptedInput::new(input_lines), output.clone());
    let outcomes = session.run(source);

    (output.lines(), outcomes)
}
