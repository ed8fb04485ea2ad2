use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::Value,
    },
};

impl Session {
    /// Applies an arithmetic operator to two numbers.
    ///
    /// `/` and `%` with a zero divisor fail with `DivisionByZero` instead of
    /// producing infinity or NaN. `%` is floored: the result takes the sign
    /// of the divisor.
    ///
    /// # Example
    /// ```
    /// use jpp::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Session, value::Value},
    /// };
    ///
    /// let r = Session::eval_scalar_op(BinaryOperator::Mod, -7.0, 3.0, 0).unwrap();
    /// assert_eq!(r, Value::Number(2.0));
    ///
    /// assert!(Session::eval_scalar_op(BinaryOperator::Div, 1.0, 0.0, 0).is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, a: f64, b: f64, offset: usize) -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero { offset }.into());
                }
                a / b
            },
            BinaryOperator::Mod => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero { offset }.into());
                }
                floored_mod(a, b)
            },
            BinaryOperator::Pow => return Self::eval_pow(a, b, offset),
        };

        Ok(Value::Number(result))
    }
}

/// Remainder of `a / b` with the sign of `b`.
fn floored_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r }
}
