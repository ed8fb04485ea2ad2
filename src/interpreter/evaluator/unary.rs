use crate::{
    ast::UnaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::Value,
    },
};

impl Session {
    /// Evaluates a unary operation on a value.
    ///
    /// Only numbers can be negated; anything else is a `TypeMismatch`.
    ///
    /// # Example
    /// ```
    /// use jpp::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Session, value::Value},
    /// };
    ///
    /// let v = Session::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 0).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// assert!(Session::eval_unary(UnaryOperator::Negate, &"x".into(), 0).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, offset: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                other => Err(EvalError::TypeMismatch { details: format!("cannot negate {}",
                                                                        other.type_name()),
                                                       offset }.into()),
            },
        }
    }
}
