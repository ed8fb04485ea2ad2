use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Session},
            function::core::BUILTIN_FUNCTIONS,
        },
        value::Value,
    },
};

impl Session {
    /// Looks up a variable by name.
    ///
    /// Variable lookup checks, in order:
    /// 1. Parameter bindings (when evaluating a function body).
    /// 2. The session's global variables.
    ///
    /// If the variable is not found, an `UndefinedVariable` error is returned.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `offset`: Offset of the reference for error reporting.
    /// - `bindings`: Optional parameter bindings for user-defined functions.
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
    /// session.environment_mut().set_variable("x", Value::Number(10.0));
    ///
    /// let v = session.eval_variable("x", 0, None).unwrap();
    /// assert_eq!(v, Value::Number(10.0));
    /// ```
    pub fn eval_variable(&self,
                         name: &str,
                         offset: usize,
                         bindings: Option<&HashMap<String, Value>>)
                         -> EvalResult<Value> {
        if let Some(b) = bindings
           && let Some(value) = b.get(name)
        {
            return Ok(value.clone());
        }
        if let Some(value) = self.environment.get_variable(name) {
            return Ok(value.clone());
        }
        Err(EvalError::UndefinedVariable { name: name.to_owned(),
                                           offset }.into())
    }

    /// Evaluates a list literal, element by element from left to right.
    pub fn eval_list_literal(&mut self,
                             elements: &[Expr],
                             bindings: Option<&HashMap<String, Value>>)
                             -> EvalResult<Value> {
        let mut values = Vec::with_capacity(elements.len());

        for element in elements {
            values.push(self.eval(element, bindings)?);
        }

        Ok(Value::from(values))
    }

    /// Evaluates a unary operator applied to a subexpression.
    ///
    /// # Example
    /// ```
    /// use jpp::{
    ///     ast::{Expr, UnaryOperator},
    ///     interpreter::{
    ///         evaluator::core::Session,
    ///         host::{CapturedOutput, ScriptedInput},
    ///         value::Value,
    ///     },
    /// };
    ///
    /// let mut session = Session::new(ScriptedInput::default(), CapturedOutput::new());
    /// let e = Expr::Literal { value:  5.0.into(),
    ///                         offset: 1, };
    ///
    /// let r = session.eval_unary_op(UnaryOperator::Negate, &e, 0, None).unwrap();
    /// assert_eq!(r, Value::Number(-5.0));
    /// ```
    pub fn eval_unary_op(&mut self,
                         op: UnaryOperator,
                         expr: &Expr,
                         offset: usize,
                         bindings: Option<&HashMap<String, Value>>)
                         -> EvalResult<Value> {
        let val = self.eval(expr, bindings)?;
        Self::eval_unary(op, &val, offset)
    }

    /// Evaluates a binary operator applied to two expressions.
    ///
    /// The left operand is evaluated before the right one; the first error
    /// wins.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          offset: usize,
                          bindings: Option<&HashMap<String, Value>>)
                          -> EvalResult<Value> {
        let lval = self.eval(left, bindings)?;
        let rval = self.eval(right, bindings)?;

        Self::eval_binary(op, &lval, &rval, offset)
    }

    /// Evaluates a function call expression.
    ///
    /// Arguments are evaluated left to right, then the call is dispatched to
    /// either a builtin or a user-defined function.
    ///
    /// # Example
    /// ```
    /// use jpp::{
    ///     ast::{Fragment, FunctionDef},
    ///     interpreter::{
    ///         evaluator::core::Session,
    ///         host::{CapturedOutput, ScriptedInput},
    ///         parser::core::parse_fragment,
    ///         value::Value,
    ///     },
    /// };
    ///
    /// let mut session = Session::new(ScriptedInput::default(), CapturedOutput::new());
    /// session.environment_mut().define_function(FunctionDef { name:   "f".into(),
    ///                                                         params: vec!["x".into()],
    ///                                                         body:   "x + 1".into(), });
    ///
    /// let call = parse_fragment(Fragment::new("f(10)")).unwrap();
    /// assert_eq!(session.eval(&call, None).unwrap(), Value::Number(11.0));
    /// ```
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              offset: usize,
                              bindings: Option<&HashMap<String, Value>>)
                              -> EvalResult<Value> {
        let mut args = Vec::with_capacity(arguments.len());

        for expr in arguments {
            args.push(self.eval(expr, bindings)?);
        }

        self.eval_function(name, &args, offset)
    }
}

/// Checks whether an identifier names a builtin function.
///
/// ## Example
/// ```
/// use jpp::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("sqrt"));
/// assert!(!is_reserved_identifier("sq"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

/// Extracts the number at `index` of a builtin's arguments.
///
/// ## Errors
/// Returns `EvalError::TypeMismatch` naming the builtin if the argument is
/// not a number.
pub fn number_arg(name: &str, args: &[Value], index: usize, offset: usize) -> EvalResult<f64> {
    match args.get(index) {
        Some(Value::Number(n)) => Ok(*n),
        Some(other) => Err(EvalError::TypeMismatch { details: format!("{name}() expects a number, found {}",
                                                                      other.type_name()),
                                                     offset }.into()),
        None => Err(EvalError::ArityMismatch { name: name.to_string(),
                                               expected: (index + 1).to_string(),
                                               found: args.len(),
                                               offset }.into()),
    }
}
