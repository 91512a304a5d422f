use thiserror::Error;

use crate::interpreter::token::Token;

/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the operator or identifier token responsible, which
/// gives the reporting identity (line and lexeme).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// A unary operator that needs a number was applied to something else.
    #[error("Operand must be a number.")]
    OperandNotNumber {
        /// The operator token.
        operator: Token,
    },
    /// A binary arithmetic or comparison operator got a non-numeric operand.
    #[error("Operands must be numbers.")]
    OperandsNotNumbers {
        /// The operator token.
        operator: Token,
    },
    /// `+` got operands that are neither two numbers nor a string followed by
    /// a string or number.
    #[error("Operands must be two numbers or two strings.")]
    InvalidAddition {
        /// The `+` token.
        operator: Token,
    },
    /// An expression node carries a token that is not an operator for its
    /// position. The parser never builds such a node; hand-built trees can.
    #[error("Unsupported operator '{}'.", .operator.lexeme)]
    UnsupportedOperator {
        /// The offending token.
        operator: Token,
    },
    /// A variable was read or assigned but no enclosing scope defines it.
    #[error("Undefined variable '{}'.", .name.lexeme)]
    UndefinedVariable {
        /// The identifier token.
        name: Token,
    },
}

impl RuntimeError {
    /// The token the error is reported against.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::OperandNotNumber { operator }
            | Self::OperandsNotNumbers { operator }
            | Self::InvalidAddition { operator }
            | Self::UnsupportedOperator { operator } => operator,
            Self::UndefinedVariable { name } => name,
        }
    }

    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.token().line
    }
}
