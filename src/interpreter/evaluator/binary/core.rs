use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::Value,
    },
};

impl Session {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic on two numbers is routed to `eval_scalar_op`, power to
    /// `eval_pow`. `+` additionally concatenates two strings or two lists.
    /// Every other combination is a `TypeMismatch`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `offset`: Offset of the operator for error reporting.
    ///
    /// # Example
    /// ```
    /// use jpp::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Session, value::Value},
    /// };
    ///
    /// let sum = Session::eval_binary(BinaryOperator::Add, &3.0.into(), &4.0.into(), 0);
    /// assert_eq!(sum.unwrap(), Value::Number(7.0));
    ///
    /// let joined = Session::eval_binary(BinaryOperator::Add, &"ab".into(), &"cd".into(), 0);
    /// assert_eq!(joined.unwrap(), Value::from("abcd"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       offset: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Pow};
        use Value::{List, Number, Str};

        match (op, left, right) {
            (Pow, Number(b), Number(e)) => Self::eval_pow(*b, *e, offset),
            (_, Number(a), Number(b)) => Self::eval_scalar_op(op, *a, *b, offset),
            (Add, Str(a), Str(b)) => Ok(Str(format!("{a}{b}"))),
            (Add, List(a), List(b)) => {
                let joined = a.iter().chain(b.iter()).cloned().collect::<Vec<_>>();
                Ok(List(Rc::new(joined)))
            },
            _ => Err(EvalError::TypeMismatch { details: format!("cannot use '{op}' on {} and {}",
                                                                left.type_name(),
                                                                right.type_name()),
                                               offset }.into()),
        }
    }
}
