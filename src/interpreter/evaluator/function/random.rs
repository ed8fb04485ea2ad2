use rand::{Rng, seq::SliceRandom};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Session},
            utils::number_arg,
        },
        value::Value,
    },
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// Returns a random whole number in the inclusive range `[lo, hi]`.
///
/// # Errors
/// - `DomainError` if either bound is not a whole number.
/// - `DomainError` if `lo > hi`.
///
/// # Example
/// ```
/// use jpp::interpreter::{
///     evaluator::{core::Session, function::random::randint},
///     host::{CapturedOutput, ScriptedInput},
///     value::Value,
/// };
///
/// let mut session = Session::new(ScriptedInput::default(), CapturedOutput::new()).with_seed(7);
///
/// let r = randint(&mut session, &[Value::Number(1.0), Value::Number(6.0)], 0).unwrap();
/// let n = r.as_number().unwrap();
/// assert!((1.0..=6.0).contains(&n) && n.fract() == 0.0);
///
/// assert!(randint(&mut session, &[Value::Number(6.0), Value::Number(1.0)], 0).is_err());
/// ```
pub fn randint(session: &mut Session, args: &[Value], offset: usize) -> EvalResult<Value> {
    let lo = f64_to_i64_checked(number_arg("randint", args, 0, offset)?, offset)?;
    let hi = f64_to_i64_checked(number_arg("randint", args, 1, offset)?, offset)?;

    if lo > hi {
        return Err(EvalError::DomainError { details: format!("empty range for randint({lo}, {hi})"),
                                            offset }.into());
    }

    let n = session.rng.gen_range(lo..=hi);
    let n = i64_to_f64_checked(n, EvalError::DomainError { details: format!("{n} is too large"),
                                                           offset })?;

    Ok(Value::Number(n))
}

/// Returns a random number in `[0, 1)`.
pub fn random(session: &mut Session, _: &[Value], _: usize) -> EvalResult<Value> {
    Ok(Value::Number(session.rng.r#gen::<f64>()))
}

/// Picks a random element of a list, or a random character of a string.
///
/// An empty list or string yields [`Value::Nothing`].
///
/// # Errors
/// - `ArityMismatch` if no argument is given.
/// - `TypeMismatch` for any other argument.
///
/// # Example
/// ```
/// use jpp::interpreter::{
///     evaluator::{core::Session, function::random::choice},
///     host::{CapturedOutput, ScriptedInput},
///     value::Value,
/// };
///
/// let mut session = Session::new(ScriptedInput::default(), CapturedOutput::new());
///
/// let items = Value::from(vec![Value::from("a"), Value::from("b")]);
/// let picked = choice(&mut session, &[items], 0).unwrap();
/// assert!(picked == Value::from("a") || picked == Value::from("b"));
///
/// let empty = Value::from(Vec::new());
/// assert_eq!(choice(&mut session, &[empty], 0).unwrap(), Value::Nothing);
///
/// assert_eq!(choice(&mut session, &[], 0).unwrap_err().kind(), "ArityMismatch");
/// ```
pub fn choice(session: &mut Session, args: &[Value], offset: usize) -> EvalResult<Value> {
    let Some(arg) = args.first() else {
        return Err(EvalError::ArityMismatch { name: "choice".to_string(),
                                              expected: "1".to_string(),
                                              found: 0,
                                              offset }.into());
    };

    match arg {
        Value::List(items) => Ok(items.choose(&mut session.rng)
                                      .cloned()
                                      .unwrap_or(Value::Nothing)),
        Value::Str(s) => {
            let chars = s.chars().collect::<Vec<_>>();
            Ok(chars.choose(&mut session.rng)
                    .map_or(Value::Nothing, |c| Value::Str(c.to_string())))
        },
        other => Err(EvalError::TypeMismatch { details: format!("choice() expects a list or string, found {}",
                                                                other.type_name()),
                                               offset }.into()),
    }
}
