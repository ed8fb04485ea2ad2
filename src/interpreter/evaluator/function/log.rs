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

/// Computes the logarithm of a value, natural or with respect to a given
/// base.
///
/// Accepts one argument, `value`, or two, `value` and `base`:
/// `log(value, base) = ln(value) / ln(base)`.
///
/// # Errors
/// - `DomainError` if `value` is not strictly positive.
/// - `DomainError` if `base` is not strictly positive or equals 1.
/// - `TypeMismatch` for non-numeric arguments.
///
/// # Example
/// ```
/// use jpp::interpreter::{
///     evaluator::{core::Session, function::log::log},
///     host::{CapturedOutput, ScriptedInput},
///     value::Value,
/// };
///
/// let mut session = Session::new(ScriptedInput::default(), CapturedOutput::new());
///
/// let e = std::f64::consts::E;
/// assert_eq!(log(&mut session, &[Value::Number(e)], 0).unwrap(), Value::Number(1.0));
///
/// let r = log(&mut session, &[Value::Number(8.0), Value::Number(2.0)], 0).unwrap();
/// assert_eq!(r, Value::Number(3.0));
///
/// assert!(log(&mut session, &[Value::Number(0.0)], 0).is_err());
/// ```
pub fn log(_: &mut Session, args: &[Value], offset: usize) -> EvalResult<Value> {
    let value = number_arg("log", args, 0, offset)?;

    if value <= 0.0 {
        return Err(EvalError::DomainError { details: format!("log of non-positive number {value}"),
                                            offset }.into());
    }

    if args.len() == 1 {
        return Ok(Value::Number(value.ln()));
    }

    let base = number_arg("log", args, 1, offset)?;

    if base <= 0.0 || base == 1.0 {
        return Err(EvalError::DomainError { details: format!("invalid logarithm base {base}"),
                                            offset }.into());
    }

    Ok(Value::Number(value.ln() / base.ln()))
}
