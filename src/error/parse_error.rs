#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Description of what was found (and, usually, what was expected).
        token:  String,
        /// Offset of the token.
        offset: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// Offset of the end of the parsed text.
        offset: usize,
    },
    /// Found extra tokens after a complete expression.
    TrailingInput {
        /// The first extra token.
        token:  String,
        /// Offset of the extra token.
        offset: usize,
    },
    /// A condition contained more than one comparison operator.
    ChainedComparison {
        /// Offset of the second comparison operator.
        offset: usize,
    },
    /// A function definition named the same parameter twice.
    DuplicateParameter {
        /// The repeated parameter name.
        name:   String,
        /// Offset of the second occurrence.
        offset: usize,
    },
    /// The expression tree grew deeper than
    /// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH).
    NestingLimit {
        /// Offset of the token that opened one level too many.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnexpectedToken { .. } => "UnexpectedToken",
            Self::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            Self::TrailingInput { .. } => "TrailingInput",
            Self::ChainedComparison { .. } => "ChainedComparison",
            Self::DuplicateParameter { .. } => "DuplicateParameter",
            Self::NestingLimit { .. } => "NestingLimit",
        }
    }

    /// Returns the offset the error points at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEndOfInput { offset }
            | Self::TrailingInput { offset, .. }
            | Self::ChainedComparison { offset }
            | Self::DuplicateParameter { offset, .. }
            | Self::NestingLimit { offset } => *offset,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, offset } => {
                write!(f, "Error at column {}: Unexpected token: {token}.", offset + 1)
            },

            Self::UnexpectedEndOfInput { offset } => {
                write!(f, "Error at column {}: Unexpected end of input.", offset + 1)
            },

            Self::TrailingInput { token, offset } => write!(f,
                                                            "Error at column {}: Extra tokens after expression, starting at {token}.",
                                                            offset + 1),

            Self::ChainedComparison { offset } => write!(f,
                                                         "Error at column {}: A condition may contain only one comparison operator.",
                                                         offset + 1),

            Self::DuplicateParameter { name, offset } => write!(f,
                                                                "Error at column {}: Parameter '{name}' is declared more than once.",
                                                                offset + 1),

            Self::NestingLimit { offset } => {
                write!(f, "Error at column {}: Expression is nested too deeply.", offset + 1)
            },
        }
    }
}

impl std::error::Error for ParseError {}
