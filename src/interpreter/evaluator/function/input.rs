use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::Value,
    },
};

impl Session {
    /// Reads one line from the session's input source.
    ///
    /// Blocks until the source supplies a line.
    ///
    /// # Errors
    /// `InputUnavailable` if the source is exhausted or fails.
    pub(crate) fn read_input(&mut self, prompt: Option<&str>) -> EvalResult<String> {
        self.input
            .read_line(prompt)
            .map_err(|e| EvalError::InputUnavailable { details: e.to_string() }.into())
    }
}

/// Reads a line of input and returns it as a string.
///
/// With an argument, its textual form is shown as the prompt.
///
/// # Example
/// ```
/// use jpp::interpreter::{
///     evaluator::{core::Session, function::input::input},
///     host::{CapturedOutput, ScriptedInput},
///     value::Value,
/// };
///
/// let mut session = Session::new(ScriptedInput::new(["Ada"]), CapturedOutput::new());
///
/// let name = input(&mut session, &[Value::from("Name? ")], 0).unwrap();
/// assert_eq!(name, Value::from("Ada"));
///
/// assert!(input(&mut session, &[], 0).is_err());
/// ```
pub fn input(session: &mut Session, args: &[Value], _: usize) -> EvalResult<Value> {
    let prompt = args.first().map(ToString::to_string);
    Ok(Value::Str(session.read_input(prompt.as_deref())?))
}
