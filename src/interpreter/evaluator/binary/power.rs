use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::Value,
    },
    util::num::is_whole,
};

impl Session {
    /// Evaluates an exponentiation operation with real-number semantics.
    ///
    /// # Errors
    /// - `DivisionByZero` when zero is raised to a negative power.
    /// - `DomainError` when a negative base is raised to a non-integer
    ///   exponent.
    ///
    /// # Example
    /// ```
    /// use jpp::interpreter::{evaluator::core::Session, value::Value};
    ///
    /// assert_eq!(Session::eval_pow(2.0, 10.0, 0).unwrap(), Value::Number(1024.0));
    /// assert_eq!(Session::eval_pow(4.0, 0.5, 0).unwrap(), Value::Number(2.0));
    /// assert!(Session::eval_pow(-8.0, 0.5, 0).is_err());
    /// ```
    pub fn eval_pow(base: f64, exponent: f64, offset: usize) -> EvalResult<Value> {
        if base == 0.0 && exponent < 0.0 {
            return Err(EvalError::DivisionByZero { offset }.into());
        }
        if base < 0.0 && exponent.is_finite() && !is_whole(exponent) {
            return Err(EvalError::DomainError { details: format!("{base} ^ {exponent} is not a real number"),
                                                offset }.into());
        }

        Ok(Value::Number(base.powf(exponent)))
    }
}
