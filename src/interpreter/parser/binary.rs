use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, descend},
            unary::{parse_primary, parse_unary},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Current nesting depth; every operator in the chain adds a level.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut level = depth;
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, offset)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let offset = *offset;
            tokens.next();
            level = descend(level, offset)?;
            let right = parse_multiplicative(tokens, level)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    offset };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`. Operands are unary
/// expressions, so `2 * -3` is accepted.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Current nesting depth; every operator in the chain adds a level.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut level = depth;
    let mut left = parse_unary(tokens, depth)?;
    loop {
        if let Some((token, offset)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let offset = *offset;
            tokens.next();
            level = descend(level, offset)?;
            let right = parse_unary(tokens, level)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    offset };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative and binds tighter than unary minus on
/// its left: `a ^ b ^ c` parses as `a ^ (b ^ c)` and `-2 ^ 2` as `-(2 ^ 2)`.
/// The exponent itself may carry a sign, as in `2 ^ -1`.
///
/// The rule is: `power := primary ("^" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Current nesting depth; the exponent sits one level deeper.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens, depth)?;
    if let Some((Token::Caret, offset)) = tokens.peek() {
        let offset = *offset;
        tokens.next();
        let exponent = parse_unary(tokens, descend(depth, offset)?)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   offset });
    }
    Ok(base)
}

/// Maps a token to its corresponding binary arithmetic operator.
///
/// # Example
/// ```
/// use jpp::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Less), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Maps a token to its corresponding comparison operator.
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::EqualEqual => Some(ComparisonOperator::Equal),
        Token::BangEqual => Some(ComparisonOperator::NotEqual),
        Token::Less => Some(ComparisonOperator::Less),
        Token::Greater => Some(ComparisonOperator::Greater),
        Token::LessEqual => Some(ComparisonOperator::LessEqual),
        Token::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        _ => None,
    }
}
