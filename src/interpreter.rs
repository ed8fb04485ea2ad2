/// The evaluator module executes statements and expression trees.
///
/// The evaluator owns the session state, walks expression trees, calls
/// builtin and user-defined functions, and runs the classified statements
/// of each line.
///
/// # Responsibilities
/// - Evaluates expressions against the session's environment.
/// - Executes statements and reports line-level errors to the output sink.
/// - Hands unrecognized lines to the host command handler.
pub mod evaluator;
/// The lexer module tokenizes one line of program text.
///
/// The lexer reads raw text and produces tokens, each paired with its offset
/// in the line: numbers, identifiers, strings, operators and punctuation.
///
/// # Responsibilities
/// - Converts the input characters into tokens with source offsets.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for unterminated strings or stray characters.
pub mod lexer;
/// The parser module classifies lines and builds expression trees.
///
/// # Responsibilities
/// - Recognizes the statement forms from the head of a line.
/// - Converts tokens into expression trees and `if` conditions.
/// - Reports syntax errors with the offset of the offending token.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Numbers, strings, booleans, lists and the absence of a value, together
/// with truthiness and their textual form.
pub mod value;
/// The environment holding a session's variables and functions.
pub mod environment;
/// Host capabilities: where input comes from, where output goes, and who
/// handles lines that are not statements.
pub mod host;
