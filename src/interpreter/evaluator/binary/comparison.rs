use std::{cmp::Ordering, collections::HashMap};

use crate::{
    ast::{ComparisonOperator, Condition},
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::Value,
    },
};

impl Session {
    /// Evaluates an `if` condition to a boolean.
    ///
    /// A comparison evaluates its left operand, then its right one, and
    /// compares them. A plain expression is coerced with
    /// [`Value::is_truthy`].
    pub fn eval_condition(&mut self,
                          condition: &Condition,
                          bindings: Option<&HashMap<String, Value>>)
                          -> EvalResult<bool> {
        match condition {
            Condition::Comparison { left,
                                    op,
                                    right,
                                    offset, } => {
                let lval = self.eval(left, bindings)?;
                let rval = self.eval(right, bindings)?;
                Self::eval_comparison(*op, &lval, &rval, *offset)
            },
            Condition::Truthy(expr) => Ok(self.eval(expr, bindings)?.is_truthy()),
        }
    }

    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` compare structurally and accept any pair of values;
    /// values of different types are simply unequal. Ordering operators
    /// accept two numbers or two strings (compared lexicographically).
    ///
    /// # Errors
    /// `TypeMismatch` when an ordering operator gets any other pair.
    ///
    /// # Example
    /// ```
    /// use jpp::{
    ///     ast::ComparisonOperator,
    ///     interpreter::{evaluator::core::Session, value::Value},
    /// };
    ///
    /// let r = Session::eval_comparison(ComparisonOperator::Less, &3.0.into(), &5.0.into(), 0);
    /// assert!(r.unwrap());
    ///
    /// let r = Session::eval_comparison(ComparisonOperator::Equal, &"3".into(), &3.0.into(), 0);
    /// assert!(!r.unwrap());
    /// ```
    pub fn eval_comparison(op: ComparisonOperator,
                           left: &Value,
                           right: &Value,
                           offset: usize)
                           -> EvalResult<bool> {
        use ComparisonOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let ordering = match op {
            Equal => return Ok(left == right),
            NotEqual => return Ok(left != right),
            Less | Greater | LessEqual | GreaterEqual => match (left, right) {
                (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
                (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
                _ => {
                    return Err(EvalError::TypeMismatch { details: format!("cannot compare {} and {} with '{op}'",
                                                                          left.type_name(),
                                                                          right.type_name()),
                                                         offset }.into());
                },
            },
        };

        // NaN orders against nothing.
        let Some(ordering) = ordering else {
            return Ok(false);
        };

        Ok(match op {
            Less => ordering == Ordering::Less,
            Greater => ordering == Ordering::Greater,
            LessEqual => ordering != Ordering::Greater,
            GreaterEqual => ordering != Ordering::Less,
            Equal | NotEqual => unreachable!("equality handled above"),
        })
    }
}
