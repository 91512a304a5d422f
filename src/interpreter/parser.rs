/// Parser state, token helpers and error recovery.
///
/// Holds the [`core::Parser`] itself, its entry point and the
/// synchronization routine that skips to the next statement boundary after a
/// syntax error.
pub mod core;
/// Statement-level grammar rules.
///
/// Declarations, `print`, expression statements and blocks.
pub mod statement;
/// Binary precedence levels.
///
/// Assignment, logical or/and, equality, comparison, term and factor, all
/// left-associative except assignment.
pub mod binary;
/// Unary operators and primary expressions.
pub mod unary;
