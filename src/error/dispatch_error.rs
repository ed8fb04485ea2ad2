#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents errors raised while classifying a line.
pub enum DispatchError {
    /// The line matched no statement form and no command handler took it.
    Unrecognized {
        /// The line as it was given.
        line: String,
    },
}

impl DispatchError {
    /// Returns the name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unrecognized { .. } => "Unrecognized",
        }
    }
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized { line } => write!(f, "Error: Unknown command - '{line}'"),
        }
    }
}

impl std::error::Error for DispatchError {}
