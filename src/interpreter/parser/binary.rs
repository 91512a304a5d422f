use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

pub(in crate::interpreter::parser) const TOO_DEEP: &str = "Expression nesting too deep.";

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, assignment, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := assignment`
    pub(in crate::interpreter::parser) fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    /// Parses an assignment, which is right-associative.
    ///
    /// The target is parsed as an ordinary `logic_or` expression first; only
    /// when an `=` follows is it checked to be a plain variable. Any other
    /// target is reported as `Invalid assignment target.` at the `=` token
    /// and the left-hand expression is kept, without synchronizing.
    ///
    /// Grammar: `assignment := IDENTIFIER "=" assignment | logic_or`
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.logic_or()?;

        if let Some(equals) = self.match_any(&[TokenKind::Equal]) {
            self.nest(&equals, TOO_DEEP)?;
            let value = self.assignment()?;
            self.unnest(1);

            if let Expr::Variable { name } = expr {
                return Ok(Expr::assign(name, value));
            }

            self.record(ParseError::new(&equals, "Invalid assignment target."));
        }

        Ok(expr)
    }

    /// Grammar: `logic_or := logic_and ( "or" logic_and )*`
    fn logic_or(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Or], Self::logic_and, Expr::logical)
    }

    /// Grammar: `logic_and := equality ( "and" equality )*`
    fn logic_and(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::And], Self::equality, Expr::logical)
    }

    /// Grammar: `equality := comparison ( ( "!=" | "==" ) comparison )*`
    fn equality(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::BangEqual, TokenKind::EqualEqual],
                              Self::comparison,
                              Expr::binary)
    }

    /// Grammar: `comparison := term ( ( ">" | ">=" | "<" | "<=" ) term )*`
    fn comparison(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Greater,
                                TokenKind::GreaterEqual,
                                TokenKind::Less,
                                TokenKind::LessEqual],
                              Self::term,
                              Expr::binary)
    }

    /// Grammar: `term := factor ( ( "-" | "+" ) factor )*`
    fn term(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Minus, TokenKind::Plus], Self::factor, Expr::binary)
    }

    /// Grammar: `factor := unary ( ( "/" | "*" ) unary )*`
    fn factor(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Slash, TokenKind::Star], Self::unary, Expr::binary)
    }

    /// Parses one left-associative precedence level.
    ///
    /// One operand is parsed with `operand`, then, while the next token is
    /// one of `operators`, another operand is parsed and folded onto the left
    /// with `build`. Every fold deepens the tree by one level and counts
    /// towards the nesting limit.
    fn left_associative(&mut self,
                        operators: &[TokenKind],
                        operand: fn(&mut Self) -> ParseResult<Expr>,
                        build: fn(Expr, Token, Expr) -> Expr)
                        -> ParseResult<Expr> {
        let mut left = operand(self)?;
        let mut folds = 0;

        while let Some(operator) = self.match_any(operators) {
            self.nest(&operator, TOO_DEEP)?;
            folds += 1;
            let right = operand(self)?;
            left = build(left, operator, right);
        }

        self.unnest(folds);
        Ok(left)
    }
}
