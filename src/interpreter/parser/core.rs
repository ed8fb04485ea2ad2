use std::iter::Peekable;

use crate::{
    ast::{Condition, Expr, Fragment},
    error::{Error, ParseError},
    interpreter::{
        lexer::{Token, tokenize},
        parser::{binary::parse_additive, condition::parse_condition},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deep one expression tree may grow.
///
/// Groupings, lists, call arguments, signs, exponents and each link of an
/// operator chain count one level. Evaluation recurses along the same tree,
/// so this also bounds the evaluator's stack use.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
/// - `depth`: Nesting levels already entered; `0` at the top of a fragment.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, depth)
}

/// Enters one more nesting level, opened by the token at `offset`.
///
/// # Errors
/// Returns `ParseError::NestingLimit` once `depth` reaches
/// [`MAX_NESTING_DEPTH`].
///
/// # Example
/// ```
/// use jpp::{
///     error::ParseError,
///     interpreter::parser::core::{MAX_NESTING_DEPTH, descend},
/// };
///
/// assert_eq!(descend(0, 3), Ok(1));
/// assert_eq!(descend(MAX_NESTING_DEPTH, 3),
///            Err(ParseError::NestingLimit { offset: 3 }));
/// ```
pub const fn descend(depth: usize, offset: usize) -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        Err(ParseError::NestingLimit { offset })
    } else {
        Ok(depth + 1)
    }
}

/// Parses a token sequence that must hold exactly one expression.
///
/// # Errors
/// Returns `ParseError::TrailingInput` if tokens remain after a complete
/// expression, or any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use jpp::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse_complete_expression},
/// };
///
/// let tokens = tokenize("1 + 2 3", 0).unwrap();
/// let err = parse_complete_expression(&tokens).unwrap_err();
///
/// assert!(matches!(err, ParseError::TrailingInput { offset: 6, .. }));
/// ```
pub fn parse_complete_expression(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;
    expect_end(&mut iter)?;
    Ok(expr)
}

/// Tokenizes and parses a fragment of a line as one expression.
///
/// Offsets in the resulting tree and in any error refer to the line the
/// fragment was cut from.
///
/// # Errors
/// Returns the lexing or parsing error, wrapped in [`Error`].
pub fn parse_fragment(fragment: Fragment<'_>) -> Result<Expr, Error> {
    let tokens = tokenize(fragment.text, fragment.offset)?;
    Ok(parse_complete_expression(&tokens)?)
}

/// Tokenizes and parses a fragment of a line as an `if` condition.
///
/// # Errors
/// Returns the lexing or parsing error, wrapped in [`Error`].
pub fn parse_condition_fragment(fragment: Fragment<'_>) -> Result<Condition, Error> {
    let tokens = tokenize(fragment.text, fragment.offset)?;
    let mut iter = tokens.iter().peekable();
    let condition = parse_condition(&mut iter)?;
    expect_end(&mut iter)?;
    Ok(condition)
}

/// Consumes the final `EndOfInput` token, failing if anything else remains.
pub(in crate::interpreter::parser) fn expect_end<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::EndOfInput, _)) | None => Ok(()),
        Some((tok, offset)) => Err(ParseError::TrailingInput { token:  tok.to_string(),
                                                               offset: *offset, }),
    }
}
