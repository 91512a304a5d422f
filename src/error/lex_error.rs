use thiserror::Error;

/// An error found while turning source text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error: {message}")]
pub struct LexError {
    /// The source line where the error occurred.
    pub line:    usize,
    /// What went wrong, e.g. `Unexpected character.`.
    pub message: String,
}

impl LexError {
    /// Creates a lexical error for `line`.
    #[must_use]
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self { line,
               message: message.into() }
    }
}
