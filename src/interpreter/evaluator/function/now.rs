use chrono::Local;

use crate::interpreter::{
    evaluator::core::{EvalResult, Session},
    value::Value,
};

/// Format of the timestamp returned by `now()`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the current local time as `YYYY-MM-DD HH:MM:SS`.
///
/// # Example
/// ```
/// use jpp::interpreter::{
///     evaluator::{core::Session, function::now::now},
///     host::{CapturedOutput, ScriptedInput},
///     value::Value,
/// };
///
/// let mut session = Session::new(ScriptedInput::default(), CapturedOutput::new());
///
/// let Value::Str(stamp) = now(&mut session, &[], 0).unwrap() else {
///     panic!("now() returns a string");
/// };
/// assert_eq!(stamp.len(), 19);
/// ```
pub fn now(_: &mut Session, _: &[Value], _: usize) -> EvalResult<Value> {
    Ok(Value::Str(Local::now().format(TIMESTAMP_FORMAT).to_string()))
}
