/// Lexing errors.
///
/// Raised while turning a line of text into tokens: an opened quote that is
/// never closed, or a character that starts no known token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building an expression tree
/// or recognizing the header of a statement (`var`, `function`, ...).
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating an
/// expression: unknown names, arity mismatches, division by zero, domain and
/// type errors.
pub mod eval_error;
/// Dispatch errors.
///
/// Raised when a line matches no statement form and no host command handler
/// accepts it.
pub mod dispatch_error;

pub use dispatch_error::DispatchError;
pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error the engine can report for a single line.
///
/// Every variant is non-fatal at the line level: the session reports it to
/// the output sink and moves on to the next line.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The line (or a function body) could not be tokenized.
    Lex(LexError),
    /// The tokens did not form a valid expression or statement header.
    Parse(ParseError),
    /// Evaluation failed.
    Eval(EvalError),
    /// The line matched no statement form.
    Dispatch(DispatchError),
}

impl Error {
    /// Returns the phase that produced the error, e.g. `"EvalError"`.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Lex(_) => "LexError",
            Self::Parse(_) => "ParseError",
            Self::Eval(_) => "EvalError",
            Self::Dispatch(_) => "DispatchError",
        }
    }

    /// Returns the name of the error kind, e.g. `"DivisionByZero"`.
    ///
    /// # Example
    /// ```
    /// use jpp::error::{Error, EvalError};
    ///
    /// let err = Error::from(EvalError::DivisionByZero { offset: 2 });
    /// assert_eq!(err.kind(), "DivisionByZero");
    /// assert_eq!(err.category(), "EvalError");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Lex(e) => e.kind(),
            Self::Parse(e) => e.kind(),
            Self::Eval(e) => e.kind(),
            Self::Dispatch(e) => e.kind(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}::{}] ", self.category(), self.kind())?;
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
            Self::Dispatch(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl From<DispatchError> for Error {
    fn from(e: DispatchError) -> Self {
        Self::Dispatch(e)
    }
}
