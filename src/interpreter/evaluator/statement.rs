use crate::{
    ast::Stmt,
    diagnostics::Output,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Executes a single statement.
    ///
    /// Expression statements are evaluated for their side effects only.
    /// `print` sends the rendered value to `out`. `var` defines (or
    /// overwrites) a binding in the current scope, `nil` when there is no
    /// initializer. Blocks run in a fresh nested scope.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised while executing.
    pub fn execute<O: Output + ?Sized>(&mut self, statement: &Stmt, out: &mut O) -> EvalResult<()> {
        tracing::trace!(%statement, "executing");

        match statement {
            Stmt::Expression { expr } => {
                self.evaluate(expr)?;
            },
            Stmt::Print { expr } => {
                let value = self.evaluate(expr)?;
                out.print(&value.to_string());
            },
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.define(self.scope, name.lexeme.clone(), value);
            },
            Stmt::Block { statements } => self.execute_block(statements, out)?,
        }

        Ok(())
    }

    /// Runs `statements` in a new scope enclosed by the current one.
    ///
    /// The scope is closed again whether or not a statement fails, so the
    /// environment is left as it was found.
    fn execute_block<O: Output + ?Sized>(&mut self,
                                         statements: &[Stmt],
                                         out: &mut O)
                                         -> EvalResult<()> {
        let enclosing = self.scope;
        self.scope = self.environment.push_scope(enclosing);

        let mut result = Ok(());
        for statement in statements {
            result = self.execute(statement, out);
            if result.is_err() {
                break;
            }
        }

        self.environment.pop_scope(self.scope);
        self.scope = enclosing;
        result
    }
}
