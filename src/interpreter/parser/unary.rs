use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_power,
            core::{ParseResult, descend, parse_expression},
            utils::{parse_comma_separated, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-associative, so `--x` parses as `-(-x)`, and it binds looser than
/// `^`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth; each `-` adds a level.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, offset)) = tokens.peek() {
        let offset = *offset;
        tokens.next();
        let expr = parse_unary(tokens, descend(depth, offset)?)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           offset })
    } else {
        parse_power(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - number and string literals
/// - list literals
/// - identifiers and calls
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | STRING
///              | "[" list_elements "]"
///              | IDENTIFIER ( "(" arguments ")" )?
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { offset: 0 })?;

    match peeked {
        (Token::Number(_) | Token::Str(_), _) => parse_literal(tokens),
        (Token::LBracket, _) => parse_list_literal(tokens, depth),
        (Token::LParen, _) => parse_grouping(tokens, depth),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens, depth),
        (tok, offset) => Err(unexpected(tok, *offset, "expected a value")),
    }
}

/// Parses a number or string literal.
///
/// # Errors
/// Returns a `ParseError` if the next token is not a literal.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), offset)) => Ok(Expr::Literal { value:  (*n).into(),
                                                               offset: *offset, }),
        Some((Token::Str(s), offset)) => Ok(Expr::Literal { value:  LiteralValue::Str(s.clone()),
                                                            offset: *offset, }),
        Some((tok, offset)) => Err(unexpected(tok, *offset, "expected a literal")),
        None => Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let offset = match tokens.next() {
        Some((_, offset)) => *offset,
        None => return Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    };
    let expr = parse_expression(tokens, descend(depth, offset)?)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, offset)) => Err(unexpected(tok, *offset, "expected ')'")),
        None => Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    }
}

/// Parses a list literal of the form `[elem1, elem2, ..., elemN]`.
///
/// Elements are restricted to literals: numbers (optionally preceded by
/// `-`), strings and nested list literals. Variables, calls and operators
/// are rejected, which keeps list syntax a plain data notation.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an element is not a literal,
/// - the closing `]` is missing,
/// - lists nest deeper than the parser allows.
fn parse_list_literal<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let offset = match tokens.next() {
        Some((_, offset)) => *offset,
        None => return Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    };
    let inner = descend(depth, offset)?;
    let elements =
        parse_comma_separated(tokens, |t| parse_list_element(t, inner), &Token::RBracket)?;
    Ok(Expr::ListLiteral { elements, offset })
}

/// Parses one element of a list literal.
///
/// Grammar: `element := "-"? NUMBER | STRING | "[" list_elements "]"`
fn parse_list_element<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Number(_) | Token::Str(_), _)) => parse_literal(tokens),
        Some((Token::LBracket, _)) => parse_list_literal(tokens, depth),
        Some((Token::Minus, offset)) => {
            let offset = *offset;
            tokens.next();
            match tokens.next() {
                Some((Token::Number(n), _)) => Ok(Expr::Literal { value: (-*n).into(),
                                                                  offset }),
                Some((tok, offset)) => {
                    Err(unexpected(tok, *offset, "expected a number after '-' in list"))
                },
                None => Err(ParseError::UnexpectedEndOfInput { offset }),
            }
        },
        Some((tok, offset)) => {
            Err(unexpected(tok, *offset, "list elements must be literals or lists"))
        },
        None => Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    }
}

/// Parses either a variable reference or a call.
///
/// An identifier directly followed by `(` is a call; whether the name is a
/// builtin, a user function or unknown is decided during evaluation.
///
/// Grammar:
/// ```text
///     identifier_or_call := IDENTIFIER
///                         | IDENTIFIER "(" (expression ("," expression)*)? ")"
/// ```
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, offset) = match tokens.next() {
        Some((Token::Identifier(name), offset)) => (name.clone(), *offset),
        Some((tok, offset)) => return Err(unexpected(tok, *offset, "expected identifier")),
        None => return Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    };

    if let Some((Token::LParen, paren)) = tokens.peek() {
        let inner = descend(depth, *paren)?;
        tokens.next();
        let arguments =
            parse_comma_separated(tokens, |t| parse_expression(t, inner), &Token::RParen)?;
        return Ok(Expr::FunctionCall { name,
                                       arguments,
                                       offset });
    }

    Ok(Expr::Variable { name, offset })
}
