use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::{Token, TokenKind},
        value::Value,
    },
    util::num::format_number,
};

impl Interpreter {
    /// Evaluates a binary operation on two already evaluated operands.
    ///
    /// - `-`, `*`, `/`: IEEE double arithmetic; both operands must be numbers.
    /// - `>`, `>=`, `<`, `<=`: numeric comparison; both operands must be
    ///   numbers.
    /// - `==`, `!=`: strict equality without coercion; `nil` equals only
    ///   `nil`.
    /// - `+`: numeric addition for two numbers; concatenation when the left
    ///   operand is a string and the right a string or number. A number on
    ///   the left with a string on the right is an error.
    ///
    /// # Errors
    /// - `RuntimeError::OperandsNotNumbers` for arithmetic and comparison on
    ///   non-numbers.
    /// - `RuntimeError::InvalidAddition` for any other `+` combination.
    /// - `RuntimeError::UnsupportedOperator` if `operator` is not a binary
    ///   operator.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     token::{Token, TokenKind},
    ///     value::Value,
    /// };
    ///
    /// let plus = Token::new(TokenKind::Plus, "+", None, 1);
    ///
    /// let sum = Interpreter::eval_binary(&plus, Value::Number(1.0), Value::Number(2.0));
    /// assert_eq!(sum, Ok(Value::Number(3.0)));
    ///
    /// let text = Interpreter::eval_binary(&plus, Value::from("a"), Value::Number(1.0));
    /// assert_eq!(text, Ok(Value::from("a1")));
    ///
    /// assert!(Interpreter::eval_binary(&plus, Value::Number(1.0), Value::from("a")).is_err());
    /// ```
    pub fn eval_binary(operator: &Token, left: Value, right: Value) -> EvalResult<Value> {
        match operator.kind {
            TokenKind::Plus => Self::eval_plus(operator, left, right),
            TokenKind::Minus => Self::arithmetic(operator, &left, &right, |a, b| a - b),
            TokenKind::Star => Self::arithmetic(operator, &left, &right, |a, b| a * b),
            TokenKind::Slash => Self::arithmetic(operator, &left, &right, |a, b| a / b),
            TokenKind::Greater => Self::comparison(operator, &left, &right, |a, b| a > b),
            TokenKind::GreaterEqual => Self::comparison(operator, &left, &right, |a, b| a >= b),
            TokenKind::Less => Self::comparison(operator, &left, &right, |a, b| a < b),
            TokenKind::LessEqual => Self::comparison(operator, &left, &right, |a, b| a <= b),
            TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
            TokenKind::BangEqual => Ok(Value::Bool(left != right)),
            _ => Err(RuntimeError::UnsupportedOperator { operator: operator.clone() }),
        }
    }

    fn eval_plus(operator: &Token, left: Value, right: Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),
            (Value::String(a), Value::Number(b)) => Ok(Value::String(a + &format_number(b))),
            (left, right) => {
                tracing::trace!(left = left.type_name(), right = right.type_name(), "invalid '+'");
                Err(RuntimeError::InvalidAddition { operator: operator.clone() })
            },
        }
    }

    fn operands(operator: &Token, left: &Value, right: &Value) -> EvalResult<(f64, f64)> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
            _ => Err(RuntimeError::OperandsNotNumbers { operator: operator.clone() }),
        }
    }

    fn arithmetic(operator: &Token,
                  left: &Value,
                  right: &Value,
                  op: impl Fn(f64, f64) -> f64)
                  -> EvalResult<Value> {
        let (a, b) = Self::operands(operator, left, right)?;
        Ok(Value::Number(op(a, b)))
    }

    fn comparison(operator: &Token,
                  left: &Value,
                  right: &Value,
                  op: impl Fn(f64, f64) -> bool)
                  -> EvalResult<Value> {
        let (a, b) = Self::operands(operator, left, right)?;
        Ok(Value::Bool(op(a, b)))
    }
}
