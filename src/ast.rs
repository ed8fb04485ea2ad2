/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in
/// source code. List literals are built from these and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A floating-point number literal.
    Number(f64),
    /// A string literal, quotes removed.
    Str(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expression trees are built fresh for every line (and for every call of a
/// user function) and dropped once evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number or string literal.
    Literal {
        /// The constant value.
        value:  LiteralValue,
        /// Offset in the source line.
        offset: usize,
    },
    /// A list literal; elements are literals or nested list literals.
    ListLiteral {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Offset in the source line.
        offset:   usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:   String,
        /// Offset in the source line.
        offset: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Offset in the source line.
        offset: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Offset of the operator in the source line.
        offset: usize,
    },
    /// Function call expression (e.g. `sin(x)` or `sq(4)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Offset in the source line.
        offset:    usize,
    },
}

impl Expr {
    /// Gets the source offset from `self`.
    /// ## Example
    /// ```
    /// use jpp::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:   "x".to_string(),
    ///                             offset: 5, };
    ///
    /// assert_eq!(expr.offset(), 5);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Literal { offset, .. }
            | Self::ListLiteral { offset, .. }
            | Self::Variable { offset, .. }
            | Self::UnaryOp { offset, .. }
            | Self::BinaryOp { offset, .. }
            | Self::FunctionCall { offset, .. } => *offset,
        }
    }
}

/// The condition of an `if` statement.
///
/// A condition holds at most one comparison operator. Without one, the whole
/// clause is an expression whose value is coerced to a boolean.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `left <op> right`
    Comparison {
        /// Left operand.
        left:   Expr,
        /// The comparison operator.
        op:     ComparisonOperator,
        /// Right operand.
        right:  Expr,
        /// Offset of the operator in the source line.
        offset: usize,
    },
    /// A plain expression tested for truthiness.
    Truthy(Expr),
}

/// A slice of a source line together with the column it starts at.
///
/// Statements keep their embedded expressions as text until they are
/// executed, so error offsets always refer to the original line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// The text of the fragment.
    pub text:   &'a str,
    /// Column of the first byte of `text` in the original line.
    pub offset: usize,
}

impl<'a> Fragment<'a> {
    /// Creates a fragment covering a whole line.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    /// Returns the part of the fragment starting at byte `at`.
    #[must_use]
    pub fn tail(&self, at: usize) -> Self {
        Self { text:   &self.text[at..],
               offset: self.offset + at, }
    }

    /// Returns the part of the fragment before byte `at`.
    #[must_use]
    pub fn head(&self, at: usize) -> Self {
        Self { text:   &self.text[..at],
               offset: self.offset, }
    }

    /// Returns `true` if the fragment holds nothing but whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Represents a user-defined function definition.
///
/// The body is stored as text and parsed on each call, so a malformed body
/// is only reported when the function is first invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order. Unique.
    pub params: Vec<String>,
    /// The body expression text.
    pub body:   String,
}

/// Represents one classified line.
///
/// Embedded expressions are kept as [`Fragment`]s of the line; they are
/// tokenized, parsed and evaluated only when the statement is executed.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    /// `var <name> = <expr>`
    Var {
        /// The name of the variable.
        name:  String,
        /// The value expression.
        value: Fragment<'a>,
    },
    /// `print <expr>`
    Print {
        /// The expression to print.
        value: Fragment<'a>,
    },
    /// `input <name>[, <prompt>]`
    Input {
        /// The variable receiving the line read.
        name:   String,
        /// Optional prompt expression.
        prompt: Option<Fragment<'a>>,
    },
    /// `if <condition> then <statement>`
    If {
        /// The condition text.
        condition: Fragment<'a>,
        /// The statement run when the condition holds.
        action:    Fragment<'a>,
    },
    /// `calc <expr>`
    Calc {
        /// The expression to compute and print.
        value: Fragment<'a>,
    },
    /// `function <name>(<params>) = <expr>`
    Function(FunctionDef),
    /// Any other line, verbatim; offered to the host command handler.
    Command(&'a str),
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a comparison operator. Only valid inside a condition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}
