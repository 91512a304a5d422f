use thiserror::Error;

use crate::interpreter::token::{Token, TokenKind};

/// A syntax error, anchored at the token where parsing went wrong.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[line {}] Error{}: {}", .token.line, location(.token), .message)]
pub struct ParseError {
    /// The offending token.
    pub token:   Token,
    /// Details about the parse error.
    pub message: String,
}

impl ParseError {
    /// Creates a syntax error at `token`.
    #[must_use]
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        Self { token:   token.clone(),
               message: message.into(), }
    }

    /// The source line of the offending token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.token.line
    }
}

/// Describes where in the token stream an error happened.
///
/// Returns `" at end"` for the end-of-input marker and `" at 'lexeme'"` for
/// every other token.
///
/// # Example
/// ```
/// use treelox::{
///     error::parse_error::location,
///     interpreter::token::{Token, TokenKind},
/// };
///
/// assert_eq!(location(&Token::eof(3)), " at end");
/// assert_eq!(location(&Token::new(TokenKind::RightParen, ")", None, 1)), " at ')'");
/// ```
#[must_use]
pub fn location(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}
