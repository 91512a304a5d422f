/// The environment module stores variable bindings.
///
/// Bindings are kept in a chain of lexical scopes. The chain is an arena of
/// scope records addressed by index, each pointing at its enclosing scope, so
/// lookups and assignments can walk outward without shared ownership.
///
/// # Responsibilities
/// - Defines, reads and assigns variables.
/// - Opens and closes nested scopes.
/// - Reports undefined variables as runtime errors.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements, applies
/// the dynamic typing rules of each operator, manages variable state, and
/// sends printed values to the host. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates every expression variant by exhaustive matching.
/// - Executes statements in order, stopping at the first runtime error.
/// - Reports runtime errors such as operand type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat sequence of
/// tokens, always terminated by an end-of-input token. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme,
///   literal and line.
/// - Handles string and number literals, identifiers, keywords, operators
///   and comments.
/// - Reports lexical errors and keeps scanning past them.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence once, left to right, by recursive
/// descent with one function per grammar rule, producing an ordered sequence
/// of statements.
///
/// # Responsibilities
/// - Converts tokens into AST nodes following the precedence ladder.
/// - Validates grammar and assignment targets, reporting errors with the
///   offending token.
/// - Recovers at statement boundaries so several errors surface per pass.
pub mod parser;
/// The token module defines lexemes and their categories.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// Runtime values are `nil`, booleans, numbers and strings. This module also
/// defines truthiness and the textual form used by `print`.
pub mod value;
