/// Core evaluation logic and interpreter state.
///
/// Contains the [`core::Interpreter`], its entry point, and the expression
/// dispatch that every evaluation goes through.
pub mod core;

/// Statement execution.
///
/// Runs expression statements, `print`, variable declarations and blocks,
/// opening and closing scopes as blocks are entered and left.
pub mod statement;

/// Unary operator evaluation.
///
/// Handles arithmetic negation and logical not.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic, comparison, equality and the `+` operator's
/// number/string rules.
pub mod binary;

/// Logical operator evaluation.
///
/// Short-circuiting `and` and `or`.
pub mod logic;
