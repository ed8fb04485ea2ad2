use std::{
    cell::RefCell,
    collections::VecDeque,
    io::{self, BufRead, Write},
    rc::Rc,
};

/// Supplies lines of external text to `input` statements and the `input()`
/// builtin.
///
/// Reading blocks until a line is available; there is no timeout.
pub trait InputSource {
    /// Reads one line, showing `prompt` first if given. The line terminator
    /// is not part of the result.
    ///
    /// # Errors
    /// Returns an error if no line can be produced (e.g. end of input).
    fn read_line(&mut self, prompt: Option<&str>) -> io::Result<String>;
}

/// Receives everything the engine writes: `print`/`calc` results and error
/// reports.
pub trait OutputSink {
    /// Writes one line of text.
    fn write_line(&mut self, text: &str);
}

/// Optional host hook offered every line that matches no statement form.
pub trait CommandHandler {
    /// Offers `line` exactly as the script wrote it, surrounding whitespace
    /// included. For `if <condition> then <command>` only the command part
    /// is offered, starting at its first non-blank character.
    ///
    /// Returns `true` if the line was handled.
    fn try_handle(&mut self, line: &str) -> bool;
}

impl<F> CommandHandler for F where F: FnMut(&str) -> bool
{
    fn try_handle(&mut self, line: &str) -> bool {
        self(line)
    }
}

/// Reads lines from standard input, writing prompts to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinSource;

impl InputSource for StdinSource {
    fn read_line(&mut self, prompt: Option<&str>) -> io::Result<String> {
        if let Some(prompt) = prompt {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(strip_line_ending(line))
    }
}

/// Writes lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Canned input for tests and non-interactive hosts.
///
/// Each read pops the next line; prompts are recorded so tests can check
/// them. Running out of lines is an `UnexpectedEof` error.
///
/// # Example
/// ```
/// use jpp::interpreter::host::{InputSource, ScriptedInput};
///
/// let mut input = ScriptedInput::new(["Ada"]);
/// assert_eq!(input.read_line(Some("Name: ")).unwrap(), "Ada");
/// assert_eq!(input.prompts(), ["Name: "]);
/// assert!(input.read_line(None).is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines:   VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Creates a source that yields `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { lines:   lines.into_iter().map(Into::into).collect(),
               prompts: Vec::new(), }
    }

    /// Returns every prompt shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: Option<&str>) -> io::Result<String> {
        if let Some(prompt) = prompt {
            self.prompts.push(prompt.to_string());
        }
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted input left"))
    }
}

/// An output sink that keeps every line in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a session
/// and inspect the other.
///
/// # Example
/// ```
/// use jpp::interpreter::host::{CapturedOutput, OutputSink};
///
/// let output = CapturedOutput::new();
/// let mut sink = output.clone();
/// sink.write_line("hello");
///
/// assert_eq!(output.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct CapturedOutput {
    lines: Rc<RefCell<Vec<String>>>,
}

impl CapturedOutput {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl OutputSink for CapturedOutput {
    fn write_line(&mut self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}

/// Removes a trailing `\n` or `\r\n`.
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
