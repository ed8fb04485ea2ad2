#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a line.
pub enum LexError {
    /// A quote was opened but the same quote character never appears again.
    UnterminatedString {
        /// Offset of the opening quote.
        offset: usize,
    },
    /// A character that starts no known token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Offset of the character.
        offset:    usize,
    },
}

impl LexError {
    /// Returns the name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnterminatedString { .. } => "UnterminatedString",
            Self::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        }
    }

    /// Returns the offset the error points at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnterminatedString { offset } | Self::UnexpectedCharacter { offset, .. } => {
                *offset
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { offset } => write!(f,
                                                          "Error at column {}: String literal is never closed.",
                                                          offset + 1),
            Self::UnexpectedCharacter { character, offset } => {
                write!(f, "Error at column {}: Unexpected character '{character}'.", offset + 1)
            },
        }
    }
}

impl std::error::Error for LexError {}
