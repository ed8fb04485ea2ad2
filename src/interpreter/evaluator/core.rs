use std::collections::HashMap;

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    ast::{Expr, Fragment},
    error::Error,
    interpreter::{
        environment::Environment,
        host::{CommandHandler, InputSource, OutputSink, StdinSource, StdoutSink},
        parser::core::{parse_condition_fragment, parse_fragment},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// Evaluation mostly fails with an `EvalError`, but calling a user function
/// parses its body, so lexing and parsing errors can surface here too.
pub type EvalResult<T> = Result<T, Error>;

/// What happened to one executed line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line was blank or a comment.
    Skipped,
    /// The line ran as one of the statement forms.
    Executed,
    /// The line matched no statement form and the command handler took it.
    Delegated,
    /// The line failed; the error has already been written to the output
    /// sink.
    Failed(Error),
}

impl Outcome {
    /// Returns `true` for [`Outcome::Failed`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Stores the runtime state of one interpreter session.
///
/// A session owns its [`Environment`], the host capabilities it reads input
/// from and writes output to, the optional command handler, and its random
/// source. Independent sessions share nothing.
///
/// ## Usage
///
/// `Session` is created once and reused for every line of a program. It is
/// meant for single-threaded use; a host delivering lines from several
/// threads must serialize its calls.
pub struct Session {
    /// The variables and functions defined so far.
    pub(crate) environment: Environment,
    /// Source of lines for `input`.
    pub(crate) input:       Box<dyn InputSource>,
    /// Sink for `print`, `calc` and error reports.
    pub(crate) output:      Box<dyn OutputSink>,
    /// Host hook for lines matching no statement form.
    pub(crate) handler:     Option<Box<dyn CommandHandler>>,
    /// Random source for `random`, `randint` and `choice`.
    pub(crate) rng:         StdRng,
    /// Current nesting of user function calls.
    pub(crate) call_depth:  usize,
}

impl Session {
    /// Creates a session with an empty environment reading from `input` and
    /// writing to `output`. The random source is seeded from the operating
    /// system.
    pub fn new(input: impl InputSource + 'static, output: impl OutputSink + 'static) -> Self {
        Self { environment: Environment::new(),
               input:       Box::new(input),
               output:      Box::new(output),
               handler:     None,
               rng:         StdRng::from_entropy(),
               call_depth:  0, }
    }

    /// Creates a session bound to standard input and standard output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(StdinSource, StdoutSink)
    }

    /// Registers the handler offered every line that matches no statement
    /// form.
    #[must_use]
    pub fn with_command_handler(mut self, handler: impl CommandHandler + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Reseeds the random source so `random`, `randint` and `choice` repeat
    /// across runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Returns the session's variables and functions.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the session's variables and functions for modification.
    pub const fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, lists, variables,
    /// unary and binary operations, and calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `bindings`: Parameter bindings when evaluating a function body. They
    ///   shadow global variables of the same name.
    pub fn eval(&mut self,
                expr: &Expr,
                bindings: Option<&HashMap<String, Value>>)
                -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::ListLiteral { elements, .. } => self.eval_list_literal(elements, bindings),
            Expr::Variable { name, offset } => self.eval_variable(name, *offset, bindings),
            Expr::UnaryOp { op, expr, offset } => {
                self.eval_unary_op(*op, expr, *offset, bindings)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             offset, } => self.eval_binary_op(left, *op, right, *offset, bindings),
            Expr::FunctionCall { name,
                                 arguments,
                                 offset, } => {
                self.eval_function_call(name, arguments, *offset, bindings)
            },
        }
    }

    /// Parses and evaluates `source` as a single expression against the
    /// current environment.
    ///
    /// Nothing is printed and no variable is written, except through nested
    /// calls such as `input(...)`.
    ///
    /// # Errors
    /// Returns the lexing, parsing or evaluation error.
    ///
    /// # Example
    /// ```
    /// use jpp::interpreter::{
    ///     evaluator::core::Session,
    ///     host::{CapturedOutput, ScriptedInput},
    ///     value::Value,
    /// };
    ///
    /// let mut session = Session::new(ScriptedInput::default(), CapturedOutput::new());
    ///
    /// assert_eq!(session.evaluate("2 + 3 * 4").unwrap(), Value::Number(14.0));
    /// assert_eq!(session.evaluate("2 ^ 3 ^ 2").unwrap(), Value::Number(512.0));
    /// ```
    pub fn evaluate(&mut self, source: &str) -> EvalResult<Value> {
        let expr = parse_fragment(Fragment::new(source))?;
        self.eval(&expr, None)
    }

    /// Parses and evaluates `source` as an `if` condition.
    ///
    /// # Errors
    /// Returns the lexing, parsing or evaluation error, including
    /// `ChainedComparison` for more than one comparison operator.
    pub fn evaluate_condition(&mut self, source: &str) -> EvalResult<bool> {
        let condition = parse_condition_fragment(Fragment::new(source))?;
        self.eval_condition(&condition, None)
    }
}
