use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Session},
            utils::number_arg,
        },
        value::Value,
    },
};

/// Applies a one-argument `f64` method as a builtin function.
///
/// The generated functions accept exactly one numeric argument. Results
/// follow IEEE-754 semantics; NaN and infinities are passed through.
/// Non-numeric arguments produce a `TypeMismatch` error.
///
/// # Example
/// ```
/// use jpp::interpreter::{
///     evaluator::{core::Session, function::builtin::sin},
///     host::{CapturedOutput, ScriptedInput},
///     value::Value,
/// };
///
/// let mut session = Session::new(ScriptedInput::default(), CapturedOutput::new());
///
/// let x = Value::Number(std::f64::consts::PI / 2.0);
/// let r = sin(&mut session, &[x], 0).unwrap();
///
/// assert_eq!(r, Value::Number(1.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(_: &mut Session, args: &[Value], offset: usize) -> EvalResult<Value> {
            let x = number_arg(stringify!($fname), args, 0, offset)?;
            Ok(Value::Number(x.$real_fn()))
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(exp, exp);
real_builtin!(abs, abs);
real_builtin!(ceil, ceil);
real_builtin!(floor, floor);

/// Computes the square root of a number.
///
/// # Errors
/// `DomainError` for a negative argument.
///
/// # Example
/// ```
/// use jpp::interpreter::{
///     evaluator::{core::Session, function::builtin::sqrt},
///     host::{CapturedOutput, ScriptedInput},
///     value::Value,
/// };
///
/// let mut session = Session::new(ScriptedInput::default(), CapturedOutput::new());
///
/// assert_eq!(sqrt(&mut session, &[Value::Number(16.0)], 0).unwrap(), Value::Number(4.0));
/// assert!(sqrt(&mut session, &[Value::Number(-1.0)], 0).is_err());
/// ```
pub fn sqrt(_: &mut Session, args: &[Value], offset: usize) -> EvalResult<Value> {
    let x = number_arg("sqrt", args, 0, offset)?;

    if x < 0.0 {
        return Err(EvalError::DomainError { details: format!("sqrt of negative number {x}"),
                                            offset }.into());
    }

    Ok(Value::Number(x.sqrt()))
}
