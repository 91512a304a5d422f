use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::{Token, TokenKind},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on an already evaluated operand.
    ///
    /// Supported operators:
    /// - `-`: numeric negation; the operand must be a number.
    /// - `!`: logical negation of the operand's truthiness.
    ///
    /// # Errors
    /// - `RuntimeError::OperandNotNumber` when `-` is applied to a non-number.
    /// - `RuntimeError::UnsupportedOperator` for any other operator token.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     token::{Token, TokenKind},
    ///     value::Value,
    /// };
    ///
    /// let minus = Token::new(TokenKind::Minus, "-", None, 1);
    /// let bang = Token::new(TokenKind::Bang, "!", None, 1);
    ///
    /// assert_eq!(Interpreter::eval_unary(&minus, &Value::Number(5.0)), Ok(Value::Number(-5.0)));
    /// assert_eq!(Interpreter::eval_unary(&bang, &Value::Nil), Ok(Value::Bool(true)));
    /// assert!(Interpreter::eval_unary(&minus, &Value::from("5")).is_err());
    /// ```
    pub fn eval_unary(operator: &Token, right: &Value) -> EvalResult<Value> {
        match operator.kind {
            TokenKind::Minus => match right {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::OperandNotNumber { operator: operator.clone() }),
            },
            TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
            _ => Err(RuntimeError::UnsupportedOperator { operator: operator.clone() }),
        }
    }
}
