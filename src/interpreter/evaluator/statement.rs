use crate::{
    ast::{Fragment, Statement},
    error::{DispatchError, EvalError},
    interpreter::{
        evaluator::{
            core::{EvalResult, Outcome, Session},
            utils::is_reserved_identifier,
        },
        parser::{
            core::{parse_condition_fragment, parse_fragment},
            statement::parse_statement,
        },
        value::Value,
    },
};

impl Session {
    /// Executes one line of a program.
    ///
    /// Blank lines and lines whose first non-whitespace character is `#` are
    /// skipped. Any error is written to the output sink as one tagged line
    /// and returned inside [`Outcome::Failed`]; it never stops the session.
    /// A failing statement leaves the environment untouched.
    ///
    /// # Example
    /// ```
    /// use jpp::interpreter::{
    ///     evaluator::core::{Outcome, Session},
    ///     host::{CapturedOutput, ScriptedInput},
    /// };
    ///
    /// let output = CapturedOutput::new();
    /// let mut session = Session::new(ScriptedInput::default(), output.clone());
    ///
    /// assert_eq!(session.execute("var x = 5"), Outcome::Executed);
    /// assert_eq!(session.execute("print x * 2"), Outcome::Executed);
    /// assert_eq!(session.execute("   # comment"), Outcome::Skipped);
    /// assert!(session.execute("print 1 / 0").is_failure());
    ///
    /// assert_eq!(output.lines(),
    ///            ["10", "[EvalError::DivisionByZero] Error at column 9: Division by zero."]);
    /// ```
    pub fn execute(&mut self, line: &str) -> Outcome {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Outcome::Skipped;
        }

        match self.dispatch(Fragment::new(line)) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.output.write_line(&e.to_string());
                Outcome::Failed(e)
            },
        }
    }

    /// Executes every line of `program` in order and returns one outcome per
    /// line.
    pub fn run(&mut self, program: &str) -> Vec<Outcome> {
        program.lines().map(|line| self.execute(line)).collect()
    }

    /// Classifies a line and runs the matching statement.
    ///
    /// The action of an `if` comes back through here, so it can be any
    /// statement form, including another `if`.
    fn dispatch(&mut self, line: Fragment<'_>) -> EvalResult<Outcome> {
        match parse_statement(line)? {
            Statement::Var { name, value } => {
                let value = self.eval_fragment(value)?;
                self.environment.set_variable(&name, value);
            },
            Statement::Print { value } | Statement::Calc { value } => {
                let value = self.eval_fragment(value)?;
                self.write_value(&value);
            },
            Statement::Input { name, prompt } => {
                let prompt = match prompt {
                    Some(fragment) => Some(self.eval_fragment(fragment)?.to_string()),
                    None => None,
                };
                let text = self.read_input(prompt.as_deref())?;
                self.environment.set_variable(&name, Value::Str(text));
            },
            Statement::If { condition, action } => {
                let condition = parse_condition_fragment(condition)?;
                if self.eval_condition(&condition, None)? {
                    return self.dispatch(action);
                }
            },
            Statement::Function(def) => {
                if is_reserved_identifier(&def.name) {
                    return Err(EvalError::BuiltinRedefinition { name: def.name }.into());
                }
                self.environment.define_function(def);
            },
            Statement::Command(text) => {
                if let Some(handler) = self.handler.as_mut()
                   && handler.try_handle(text)
                {
                    return Ok(Outcome::Delegated);
                }
                return Err(DispatchError::Unrecognized { line: text.trim().to_string() }.into());
            },
        }

        Ok(Outcome::Executed)
    }

    /// Parses and evaluates an expression embedded in a statement.
    fn eval_fragment(&mut self, fragment: Fragment<'_>) -> EvalResult<Value> {
        let expr = parse_fragment(fragment)?;
        self.eval(&expr, None)
    }

    /// Writes a value's textual form to the output sink. `Nothing` writes no
    /// line at all.
    fn write_value(&mut self, value: &Value) {
        if !value.is_nothing() {
            self.output.write_line(&value.to_string());
        }
    }
}
