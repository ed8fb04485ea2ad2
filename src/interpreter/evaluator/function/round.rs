use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Session},
            utils::number_arg,
        },
        value::Value,
    },
    util::num::f64_to_i64_checked,
};

/// Rounds a number half to even.
///
/// With a second argument `ndigits`, rounds to that many decimal digits; a
/// negative `ndigits` rounds to tens, hundreds, and so on.
///
/// # Errors
/// - `DomainError` if `ndigits` is not a whole number.
/// - `TypeMismatch` for non-numeric arguments.
///
/// # Example
/// ```
/// use jpp::interpreter::{
///     evaluator::{core::Session, function::round::round},
///     host::{CapturedOutput, ScriptedInput},
///     value::Value,
/// };
///
/// let mut session = Session::new(ScriptedInput::default(), CapturedOutput::new());
///
/// assert_eq!(round(&mut session, &[Value::Number(2.5)], 0).unwrap(), Value::Number(2.0));
/// assert_eq!(round(&mut session, &[Value::Number(3.5)], 0).unwrap(), Value::Number(4.0));
///
/// let r = round(&mut session, &[Value::Number(1234.0), Value::Number(-2.0)], 0).unwrap();
/// assert_eq!(r, Value::Number(1200.0));
/// ```
pub fn round(_: &mut Session, args: &[Value], offset: usize) -> EvalResult<Value> {
    let x = number_arg("round", args, 0, offset)?;

    if args.len() == 1 {
        return Ok(Value::Number(x.round_ties_even()));
    }

    let digits = f64_to_i64_checked(number_arg("round", args, 1, offset)?, offset)?;
    let digits = i32::try_from(digits).map_err(|_| {
                                          EvalError::DomainError { details: format!("cannot round to {digits} digits"),
                                                                   offset }
                                      })?;

    let factor = 10f64.powi(digits.abs());
    let rounded = if digits >= 0 {
        let scaled = x * factor;
        if !scaled.is_finite() {
            return Ok(Value::Number(x));
        }
        scaled.round_ties_even() / factor
    } else {
        (x / factor).round_ties_even() * factor
    };

    Ok(Value::Number(rounded))
}
