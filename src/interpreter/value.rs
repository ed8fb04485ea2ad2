use std::rc::Rc;

use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// variables, function returns, and conditions. Every evaluation yields
/// exactly one complete `Value` or an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value.
    Str(String),
    /// A boolean value (`true` or `false`).
    /// Produced by the comparison in an `if` condition.
    Bool(bool),
    /// An ordered list of values. Duplicates are allowed.
    List(Rc<Vec<Self>>),
    /// The absence of a value, e.g. `choice([])`. Printing it writes nothing.
    Nothing,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// Returns the name of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::List(_) => "list",
            Self::Nothing => "nothing",
        }
    }

    /// Coerces the value to a boolean.
    ///
    /// Nonzero numbers, non-empty strings and lists are true; `Nothing` is
    /// false.
    ///
    /// # Example
    /// ```
    /// use jpp::interpreter::value::Value;
    ///
    /// assert!(Value::Number(2.0).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(!Value::Nothing.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::List(items) => !items.is_empty(),
            Self::Nothing => false,
        }
    }

    /// Returns the number held by the value, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`Value::Nothing`].
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Writes the value as it appears nested inside a list: strings are
    /// quoted so `['a', 1]` stays readable.
    fn fmt_nested(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "'{s}'"),
            other => write!(f, "{other}"),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    value.fmt_nested(f)?;
                }

                write!(f, "]")
            },
            Self::Nothing => write!(f, "nothing"),
        }
    }
}
