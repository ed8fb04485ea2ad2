use std::iter::Peekable;

use crate::{
    ast::Condition,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::{parse_additive, token_to_comparison_operator},
            core::ParseResult,
        },
    },
};

/// Parses the condition of an `if` statement.
///
/// A condition is either one comparison between two arithmetic expressions,
/// or a single arithmetic expression tested for truthiness. Comparisons are
/// non-associative: a second comparison operator is rejected rather than
/// chained.
///
/// Grammar:
/// ```text
///     condition := additive (COMPARISON additive)?
/// ```
///
/// # Errors
/// - `ParseError::ChainedComparison` if a second comparison operator follows
///   a complete comparison.
/// - Any error raised while parsing the operands.
///
/// # Example
/// ```
/// use jpp::{
///     ast::{ComparisonOperator, Condition},
///     interpreter::{lexer::tokenize, parser::condition::parse_condition},
/// };
///
/// let tokens = tokenize("x >= 2", 0).unwrap();
/// let condition = parse_condition(&mut tokens.iter().peekable()).unwrap();
///
/// assert!(matches!(condition,
///                  Condition::Comparison { op: ComparisonOperator::GreaterEqual, .. }));
/// ```
pub fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Condition>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_additive(tokens, 0)?;

    let (op, offset) = match tokens.peek() {
        Some((token, offset)) => match token_to_comparison_operator(token) {
            Some(op) => (op, *offset),
            None => return Ok(Condition::Truthy(left)),
        },
        None => return Ok(Condition::Truthy(left)),
    };
    tokens.next();

    let right = parse_additive(tokens, 0)?;

    if let Some((token, second)) = tokens.peek()
       && token_to_comparison_operator(token).is_some()
    {
        return Err(ParseError::ChainedComparison { offset: *second });
    }

    Ok(Condition::Comparison { left,
                               op,
                               right,
                               offset })
}
