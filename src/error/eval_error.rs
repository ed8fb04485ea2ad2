#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Tried to use an undefined variable.
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// Offset of the reference.
        offset: usize,
    },
    /// Called a name that is neither a builtin nor a user function.
    UndefinedFunction {
        /// The name of the function.
        name:   String,
        /// Offset of the call.
        offset: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Human readable description of the accepted argument counts.
        expected: String,
        /// Number of arguments actually supplied.
        found:    usize,
        /// Offset of the call.
        offset:   usize,
    },
    /// Division or modulo by zero, or zero raised to a negative power.
    DivisionByZero {
        /// Offset of the operator.
        offset: usize,
    },
    /// An argument lies outside the domain of the operation.
    DomainError {
        /// Details about why the argument is invalid.
        details: String,
        /// Offset of the operation.
        offset:  usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// Offset of the operation.
        offset:  usize,
    },
    /// Attempted to define a user function with a builtin name.
    BuiltinRedefinition {
        /// The name of the function.
        name: String,
    },
    /// User function calls nested too deeply.
    RecursionLimit {
        /// The name of the function whose call exceeded the limit.
        name:   String,
        /// Offset of the call.
        offset: usize,
    },
    /// The input source could not supply a line.
    InputUnavailable {
        /// Details reported by the input source.
        details: String,
    },
}

impl EvalError {
    /// Returns the name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UndefinedVariable { .. } => "UndefinedVariable",
            Self::UndefinedFunction { .. } => "UndefinedFunction",
            Self::ArityMismatch { .. } => "ArityMismatch",
            Self::DivisionByZero { .. } => "DivisionByZero",
            Self::DomainError { .. } => "DomainError",
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::BuiltinRedefinition { .. } => "BuiltinRedefinition",
            Self::RecursionLimit { .. } => "RecursionLimit",
            Self::InputUnavailable { .. } => "InputUnavailable",
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, offset } => {
                write!(f, "Error at column {}: Unknown variable '{name}'.", offset + 1)
            },
            Self::UndefinedFunction { name, offset } => {
                write!(f, "Error at column {}: Unknown function '{name}'.", offset + 1)
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  offset, } => write!(f,
                                                      "Error at column {}: '{name}' takes {expected} argument(s), but {found} were given.",
                                                      offset + 1),
            Self::DivisionByZero { offset } => {
                write!(f, "Error at column {}: Division by zero.", offset + 1)
            },
            Self::DomainError { details, offset } => {
                write!(f, "Error at column {}: Math domain error: {details}.", offset + 1)
            },
            Self::TypeMismatch { details, offset } => {
                write!(f, "Error at column {}: Type error: {details}.", offset + 1)
            },
            Self::BuiltinRedefinition { name } => {
                write!(f, "Error: Cannot redefine built-in function '{name}'.")
            },
            Self::RecursionLimit { name, offset } => write!(f,
                                                            "Error at column {}: Calls to '{name}' nest too deeply.",
                                                            offset + 1),
            Self::InputUnavailable { details } => {
                write!(f, "Error: No input available: {details}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
