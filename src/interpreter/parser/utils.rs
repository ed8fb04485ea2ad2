use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals and call argument lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, offset)) => {
                return Err(unexpected(tok, *offset, &format!("expected ',' or {closing}")));
            },
            None => return Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
        }
    }
    Ok(items)
}

/// Builds the error for a token that cannot appear where it was found.
///
/// Running into [`Token::EndOfInput`] is reported as
/// `UnexpectedEndOfInput`; any other token as `UnexpectedToken` with `hint`
/// appended.
///
/// # Example
/// ```
/// use jpp::{
///     error::ParseError,
///     interpreter::{lexer::Token, parser::utils::unexpected},
/// };
///
/// let err = unexpected(&Token::EndOfInput, 7, "expected ')'");
/// assert_eq!(err, ParseError::UnexpectedEndOfInput { offset: 7 });
/// ```
#[must_use]
pub fn unexpected(token: &Token, offset: usize, hint: &str) -> ParseError {
    match token {
        Token::EndOfInput => ParseError::UnexpectedEndOfInput { offset },
        tok => ParseError::UnexpectedToken { token: format!("{tok} ({hint})"),
                                             offset },
    }
}
