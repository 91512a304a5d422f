use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::{Token, TokenKind},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates `and` / `or` with short-circuiting.
    ///
    /// The left operand is always evaluated. `or` returns it if it is truthy
    /// and `and` returns it if it is falsy, without evaluating the right
    /// operand; otherwise the right operand's value is the result. The value
    /// returned is the operand itself, not a boolean.
    pub(in crate::interpreter::evaluator) fn eval_logical(&mut self,
                                                          left: &Expr,
                                                          operator: &Token,
                                                          right: &Expr)
                                                          -> EvalResult<Value> {
        let left = self.evaluate(left)?;

        let short_circuits = match operator.kind {
            TokenKind::Or => left.is_truthy(),
            TokenKind::And => !left.is_truthy(),
            _ => return Err(RuntimeError::UnsupportedOperator { operator: operator.clone() }),
        };

        if short_circuits {
            return Ok(left);
        }

        self.evaluate(right)
    }
}
