use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::{
            binary::TOO_DEEP,
            core::{ParseResult, Parser},
        },
        token::{Literal, TokenKind},
    },
};

impl Parser<'_> {
    /// Parses prefix operators, which nest to the right: `!!x`, `--x`.
    ///
    /// Grammar: `unary := ( "!" | "-" ) unary | primary`
    pub(in crate::interpreter::parser) fn unary(&mut self) -> ParseResult<Expr> {
        if let Some(operator) = self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            self.nest(&operator, TOO_DEEP)?;
            let right = self.unary()?;
            self.unnest(1);
            return Ok(Expr::unary(operator, right));
        }

        self.primary()
    }

    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    /// primary := NUMBER | STRING | "true" | "false" | "nil"
    ///          | "(" expression ")" | IDENTIFIER
    /// ```
    ///
    /// # Errors
    /// - `Expect expression.` if the current token cannot start an
    ///   expression.
    /// - `Expect ')' after expression.` if a group is not closed.
    /// - `Expression nesting too deep.` if a group opens past the nesting
    ///   limit.
    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.peek();

        let expr = match token.kind {
            TokenKind::False => Expr::literal(Literal::Bool(false)),
            TokenKind::True => Expr::literal(Literal::Bool(true)),
            TokenKind::Nil => Expr::literal(Literal::Nil),
            TokenKind::Number | TokenKind::String => {
                Expr::literal(token.literal.clone().unwrap_or(Literal::Nil))
            },
            TokenKind::Identifier => Expr::Variable { name: token.clone() },
            TokenKind::LeftParen => {
                let paren = self.advance();
                self.nest(&paren, TOO_DEEP)?;
                let expression = self.expression()?;
                self.unnest(1);
                self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::grouping(expression));
            },
            _ => return Err(ParseError::new(token, "Expect expression.")),
        };

        self.advance();
        Ok(expr)
    }
}
