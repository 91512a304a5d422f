use crate::error::RuntimeError;

/// Receives every error the pipeline detects.
///
/// The lexer and parser report through [`Diagnostics::error`] with a line, a
/// location fragment (empty, `" at end"` or `" at 'lexeme'"`) and a message.
/// The evaluator reports the runtime error that aborted a run through
/// [`Diagnostics::runtime_error`]. Implementations only record or display;
/// the pipeline never asks them for a decision.
pub trait Diagnostics {
    /// Reports a lexical or syntax error.
    fn error(&mut self, line: usize, location: &str, message: &str);

    /// Reports the runtime error that stopped the current run.
    fn runtime_error(&mut self, error: &RuntimeError);
}

/// Receives the rendered text of each executed `print` statement, in
/// execution order.
pub trait Output {
    /// Writes one printed value.
    fn print(&mut self, text: &str);
}

/// Everything an embedding application supplies to a run.
pub trait Host: Diagnostics + Output {}

impl<T: Diagnostics + Output> Host for T {}

/// Formats a static error the way [`Console`] and [`Capture`] display it.
#[must_use]
pub fn format_error(line: usize, location: &str, message: &str) -> String {
    format!("[line {line}] Error{location}: {message}")
}

/// Formats a runtime error as its message followed by the source line.
#[must_use]
pub fn format_runtime_error(error: &RuntimeError) -> String {
    format!("{error}\n[line {}]", error.line())
}

/// Writes errors to stderr and printed values to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Diagnostics for Console {
    fn error(&mut self, line: usize, location: &str, message: &str) {
        eprintln!("{}", format_error(line, location, message));
    }

    fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("{}", format_runtime_error(error));
    }
}

impl Output for Console {
    fn print(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Keeps everything in memory. Useful for embedding and for tests.
///
/// # Example
/// ```
/// use treelox::{Lox, diagnostics::Capture};
///
/// let mut capture = Capture::default();
/// let outcome = Lox::new().run("print 1 + 2;", &mut capture);
///
/// assert!(outcome.is_success());
/// assert_eq!(capture.output, vec!["3"]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Printed values, one entry per `print` statement.
    pub output: Vec<String>,
    /// Formatted error reports, static and runtime alike.
    pub errors: Vec<String>,
}

impl Diagnostics for Capture {
    fn error(&mut self, line: usize, location: &str, message: &str) {
        self.errors.push(format_error(line, location, message));
    }

    fn runtime_error(&mut self, error: &RuntimeError) {
        self.errors.push(format_runtime_error(error));
    }
}

impl Output for Capture {
    fn print(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
