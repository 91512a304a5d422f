use crate::{
    ast::{Expr, Stmt},
    diagnostics::Host,
    error::RuntimeError,
    interpreter::{
        environment::{Environment, ScopeId},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The tree-walking interpreter.
///
/// Holds the variable environment, which persists across calls to
/// [`Interpreter::interpret`], and the scope currently in effect. Each
/// expression variant is handled by exhaustive matching in
/// [`Interpreter::evaluate`]; the operator rules live in the sibling modules.
///
/// ## Usage
///
/// Create one `Interpreter` per session and feed it parsed programs. Names
/// bound by one program stay visible to the next.
#[derive(Debug)]
pub struct Interpreter {
    pub(in crate::interpreter::evaluator) environment: Environment,
    pub(in crate::interpreter::evaluator) scope: ScopeId,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { environment: Environment::new(),
               scope:       ScopeId::GLOBAL, }
    }

    /// Binds `name` in the global scope, overwriting any previous binding.
    ///
    /// Lets a host provide values before running a program.
    pub fn define_global(&mut self, name: impl Into<String>, value: Value) {
        self.environment.define(ScopeId::GLOBAL, name, value);
    }

    /// Read access to the variable bindings.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Executes `statements` in order.
    ///
    /// Execution stops at the first runtime error, which is reported whole to
    /// the host's diagnostics and returned; the remaining statements are
    /// skipped. Printed values go to the host's output as they are produced.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     diagnostics::Capture,
    ///     interpreter::{
    ///         evaluator::core::Interpreter, lexer::Lexer, parser::core::Parser,
    ///     },
    /// };
    ///
    /// let mut capture = Capture::default();
    /// let tokens = Lexer::new("print -x; print 2;", &mut capture).scan_tokens().tokens;
    /// let statements = Parser::new(&tokens, &mut capture).parse().statements;
    ///
    /// let result = Interpreter::new().interpret(&statements, &mut capture);
    ///
    /// assert!(result.is_err());
    /// assert!(capture.output.is_empty());
    /// assert_eq!(capture.errors, vec!["Undefined variable 'x'.\n[line 1]"]);
    /// ```
    pub fn interpret<H: Host + ?Sized>(&mut self,
                                       statements: &[Stmt],
                                       host: &mut H)
                                       -> EvalResult<()> {
        tracing::debug!(statements = statements.len(), "interpreting");

        for statement in statements {
            if let Err(error) = self.execute(statement, host) {
                tracing::debug!(line = error.line(), %error, "runtime error aborted run");
                host.runtime_error(&error);
                return Err(error);
            }
        }

        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, groupings, variables,
    /// assignments, unary, binary and logical operations.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any subexpression.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(value.into()),
            Expr::Grouping { expression } => self.evaluate(expression),
            Expr::Unary { operator, right } => {
                let right = self.evaluate(right)?;
                Self::eval_unary(operator, &right)
            },
            Expr::Binary { left,
                           operator,
                           right, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::eval_binary(operator, left, right)
            },
            Expr::Logical { left,
                            operator,
                            right, } => self.eval_logical(left, operator, right),
            Expr::Variable { name } => self.environment.get(self.scope, name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.assign(self.scope, name, value.clone())?;
                Ok(value)
            },
        }
    }
}
