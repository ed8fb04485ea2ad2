use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in a line of program text.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`. A sign is lexed
    /// as a separate `-` token.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Identifier tokens; variable, function, or keyword names such as `x`,
    /// `sqrt` or `then`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// String literal tokens, `"..."` or `'...'`. The string runs to the next
    /// occurrence of the opening quote; there are no escapes.
    #[regex(r#""[^"]*""#, unquote)]
    #[regex(r"'[^']*'", unquote)]
    Str(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// Whitespace between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
    /// Marks the end of the tokenized text. Never produced by the generated
    /// lexer itself; [`tokenize`] appends it.
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Str(s) => write!(f, "string \"{s}\""),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::Caret => write!(f, "'^'"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Comma => write!(f, "','"),
            Self::Equals => write!(f, "'='"),
            Self::Ignored => write!(f, "whitespace"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Tokenizes `source`, whose first byte sits at column `base` of the line it
/// was cut from.
///
/// The returned sequence pairs every token with its offset and always ends
/// with [`Token::EndOfInput`] at the offset just past the text.
///
/// # Errors
/// - `LexError::UnterminatedString` if a quote is never closed.
/// - `LexError::UnexpectedCharacter` for a character that starts no token.
///
/// # Example
/// ```
/// use jpp::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x + 1.5", 0).unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".to_string()), 0),
///                 (Token::Plus, 2),
///                 (Token::Number(1.5), 4),
///                 (Token::EndOfInput, 7)]);
/// ```
pub fn tokenize(source: &str, base: usize) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, base + start)),
            Err(()) => return Err(lex_error_at(source, start, base)),
        }
    }

    tokens.push((Token::EndOfInput, base + source.len()));
    Ok(tokens)
}

/// Classifies a lexing failure that starts at byte `start` of `source`.
fn lex_error_at(source: &str, start: usize, base: usize) -> LexError {
    match source[start..].chars().next() {
        Some('"' | '\'') => LexError::UnterminatedString { offset: base + start },
        Some(character) => LexError::UnexpectedCharacter { character,
                                                           offset: base + start },
        None => LexError::UnexpectedCharacter { character: ' ',
                                                offset:    base + start, },
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal.
fn unquote(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
