//! # treelox
//!
//! treelox is a tree-walking interpreter for a small dynamically-typed
//! scripting language. Source text is scanned into tokens, parsed by
//! recursive descent into an abstract syntax tree, and executed against a
//! chain of lexically scoped variable bindings.
//!
//! ```
//! use treelox::{Lox, diagnostics::Capture};
//!
//! let mut lox = Lox::new();
//! let mut capture = Capture::default();
//!
//! lox.run("var greeting = \"hello\";", &mut capture);
//! lox.run("print greeting + \" \" + 42;", &mut capture);
//!
//! assert_eq!(capture.output, vec!["hello 42"]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Stmt,
    diagnostics::{Diagnostics, Host},
    error::{LexError, ParseError},
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Lexer, Scanned},
        parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps operator and identifier tokens on nodes for error reporting.
/// - Renders trees in a compact prefix form for dumps and tests.
pub mod ast;
/// Collaborators supplied by the embedding application.
///
/// Errors and printed values leave the pipeline only through the traits in
/// this module. Console and in-memory implementations are provided.
pub mod diagnostics;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while running code. Each
/// carries its source line and, where one exists, the offending token.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and messages for context.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and variable storage.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment
///   and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
///
/// Number rendering shared by `print`, string concatenation and dumps.
pub mod util;

/// What happened during one [`Lox::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Lexing or parsing reported at least one error. The program was not
    /// executed.
    pub had_error:         bool,
    /// Execution stopped at a runtime error.
    pub had_runtime_error: bool,
}

impl Outcome {
    /// Whether the run completed with no errors of any kind.
    #[must_use]
    pub const fn is_success(self) -> bool {
        !self.had_error && !self.had_runtime_error
    }
}

/// A program after lexing and parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The statements that parsed completely.
    pub statements:   Vec<Stmt>,
    /// Lexical errors, in source order.
    pub lex_errors:   Vec<LexError>,
    /// Syntax errors, in source order.
    pub parse_errors: Vec<ParseError>,
}

impl Program {
    /// Whether neither lexing nor parsing reported an error.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.lex_errors.is_empty() && self.parse_errors.is_empty()
    }
}

/// An interpreter session.
///
/// A session owns one [`Interpreter`], so variables defined by one call to
/// [`Lox::run`] stay visible to the next. This is what a REPL keeps between
/// lines.
#[derive(Debug, Default)]
pub struct Lox {
    interpreter: Interpreter,
}

impl Lox {
    /// Creates a session with an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { interpreter: Interpreter::new() }
    }

    /// Mutable access to the session's interpreter, e.g. to pre-bind
    /// globals with [`Interpreter::define_global`].
    pub const fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }

    /// Scans `source` into tokens, reporting lexical errors to
    /// `diagnostics`.
    pub fn tokens<D: Diagnostics>(source: &str, diagnostics: &mut D) -> Scanned {
        Lexer::new(source, &mut *diagnostics).scan_tokens()
    }

    /// Scans and parses `source`, reporting every lexical and syntax error to
    /// `diagnostics`.
    ///
    /// Parsing is attempted even when lexing found errors, so both kinds are
    /// collected in one call.
    pub fn parse<D: Diagnostics>(source: &str, diagnostics: &mut D) -> Program {
        let scanned = Lexer::new(source, &mut *diagnostics).scan_tokens();
        let parsed = Parser::new(&scanned.tokens, &mut *diagnostics).parse();

        Program { statements:   parsed.statements,
                  lex_errors:   scanned.errors,
                  parse_errors: parsed.errors, }
    }

    /// Runs `source` to completion.
    ///
    /// The source is scanned and parsed first. If either phase reported an
    /// error nothing is executed. Otherwise the statements run in order until
    /// the end or the first runtime error. All errors and printed values go
    /// to `host`.
    ///
    /// # Example
    /// ```
    /// use treelox::{Lox, diagnostics::Capture};
    ///
    /// let mut capture = Capture::default();
    /// let outcome = Lox::new().run("print true + 1;", &mut capture);
    ///
    /// assert!(outcome.had_runtime_error);
    /// assert_eq!(capture.errors,
    ///            vec!["Operands must be two numbers or two strings.\n[line 1]"]);
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn run<H: Host>(&mut self, source: &str, host: &mut H) -> Outcome {
        let program = Self::parse(source, host);

        if !program.is_clean() {
            tracing::debug!(lex_errors = program.lex_errors.len(),
                            parse_errors = program.parse_errors.len(),
                            "skipping execution");
            return Outcome { had_error:         true,
                             had_runtime_error: false, };
        }

        let result = self.interpreter.interpret(&program.statements, host);

        Outcome { had_error:         false,
                  had_runtime_error: result.is_err(), }
    }
}
