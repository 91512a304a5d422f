/// Lexical errors.
///
/// Raised by the lexer for characters it cannot recognize and for string
/// literals that never close. Lexing continues after each one, so a single
/// scan may produce several.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the syntax errors the parser raises for missing or unexpected
/// tokens and for invalid assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include operand type mismatches and reads or writes of undefined
/// variables. The first one raised ends the current run.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
