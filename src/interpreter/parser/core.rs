use crate::{
    ast::{Expr, Stmt},
    diagnostics::Diagnostics,
    error::{ParseError, parse_error::location},
    interpreter::token::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deep expressions and blocks may nest before parsing fails. Bounds the
/// recursion of the parser, the evaluator and the tree's destructor.
pub const MAX_NESTING: usize = 128;

/// Recursive-descent parser over a scanned token sequence.
///
/// The parser consumes its tokens once, left to right. Grammar rules live in
/// the sibling modules as further `impl` blocks: statements in
/// [`statement`](super::statement), the binary precedence ladder in
/// [`binary`](super::binary) and unary/primary expressions in
/// [`unary`](super::unary).
///
/// Every syntax error is reported to the diagnostics collaborator as soon as
/// it is found and kept in [`Parsed::errors`].
pub struct Parser<'a> {
    tokens:      &'a [Token],
    current:     usize,
    eof:         Token,
    diagnostics: &'a mut dyn Diagnostics,
    errors:      Vec<ParseError>,
    depth:       usize,
}

/// The result of parsing a whole program.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The statements that parsed completely, in source order.
    pub statements: Vec<Stmt>,
    /// Every syntax error found, in source order.
    pub errors:     Vec<ParseError>,
}

impl Parsed {
    /// Whether parsing produced no errors.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens` that reports to `diagnostics`.
    ///
    /// The token sequence is expected to end with an `EOF` token, as the
    /// lexer guarantees; if it does not, one is assumed after the last token.
    pub fn new(tokens: &'a [Token], diagnostics: &'a mut dyn Diagnostics) -> Self {
        let line = tokens.last().map_or(1, |t| t.line);
        Self { tokens,
               current: 0,
               eof: Token::eof(line),
               diagnostics,
               errors: Vec::new(),
               depth: 0 }
    }

    /// Parses the whole program.
    ///
    /// Grammar: `program := declaration* EOF`
    ///
    /// After a syntax error the parser skips to the next statement boundary
    /// and keeps going, so one pass can surface several errors. Statements
    /// that failed to parse are left out of the result.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     diagnostics::Capture,
    ///     interpreter::{lexer::Lexer, parser::core::Parser},
    /// };
    ///
    /// let mut capture = Capture::default();
    /// let tokens = Lexer::new("print 1 + 2 * 3;", &mut capture).scan_tokens().tokens;
    /// let parsed = Parser::new(&tokens, &mut capture).parse();
    ///
    /// assert!(parsed.is_clean());
    /// assert_eq!(parsed.statements[0].to_string(), "(print (+ 1 (* 2 3)))");
    /// ```
    #[must_use]
    pub fn parse(mut self) -> Parsed {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }

        tracing::debug!(statements = statements.len(),
                        errors = self.errors.len(),
                        "parsed program");

        Parsed { statements,
                 errors: self.errors }
    }

    /// Parses a single expression that must span the whole input.
    ///
    /// Used for expression dumps and by hosts that evaluate bare
    /// expressions.
    ///
    /// # Errors
    /// Returns the first syntax error, including one recorded without
    /// aborting the parse such as an invalid assignment target, or an error
    /// at the first token left over after the expression.
    pub fn parse_expression(mut self) -> ParseResult<Expr> {
        let expr = self.expression()
                       .inspect_err(|error| self.report(error))?;
        if !self.errors.is_empty() {
            return Err(self.errors.swap_remove(0));
        }
        if !self.is_at_end() {
            let error = ParseError::new(self.peek(), "Expect end of expression.");
            self.report(&error);
            return Err(error);
        }
        Ok(expr)
    }

    /// Records an error: reports it to the diagnostics and keeps it.
    pub(in crate::interpreter::parser) fn record(&mut self, error: ParseError) {
        self.report(&error);
        self.errors.push(error);
    }

    fn report(&mut self, error: &ParseError) {
        self.diagnostics
            .error(error.token.line, &location(&error.token), &error.message);
    }

    /// Enters one level of nesting at `token`, failing with `message` once
    /// [`MAX_NESTING`] levels are open.
    pub(in crate::interpreter::parser) fn nest(&mut self,
                                               token: &Token,
                                               message: &str)
                                               -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::new(token, message));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves `levels` levels of nesting.
    pub(in crate::interpreter::parser) const fn unnest(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// Current nesting depth.
    pub(in crate::interpreter::parser) const fn depth(&self) -> usize {
        self.depth
    }

    /// Restores the nesting depth after an error unwound past `unnest`.
    pub(in crate::interpreter::parser) const fn reset_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Skips tokens until a likely statement boundary.
    ///
    /// Stops just after a `;`, or just before a keyword that begins a
    /// declaration or statement.
    pub(in crate::interpreter::parser) fn synchronize(&mut self) {
        let skipped = self.advance();
        if skipped.kind == TokenKind::Semicolon {
            return;
        }

        while !self.is_at_end() {
            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {},
            }

            if self.advance().kind == TokenKind::Semicolon {
                return;
            }
        }
    }

    pub(in crate::interpreter::parser) fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.eof)
    }

    pub(in crate::interpreter::parser) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes and returns the current token. At the end of input the `EOF`
    /// token is returned without moving.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Consumes the current token if its kind is one of `kinds`.
    pub(in crate::interpreter::parser) fn match_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.iter().any(|kind| self.check(*kind)) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes a token of `kind` or fails with `message` at the current
    /// token.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  kind: TokenKind,
                                                  message: &str)
                                                  -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::new(self.peek(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, Stmt},
        diagnostics::Capture,
        interpreter::{
            lexer::Lexer,
            parser::core::{MAX_NESTING, Parsed, Parser},
            token::{Literal, Token, TokenKind},
        },
    };

    fn parse(source: &str) -> (Parsed, Capture) {
        let mut capture = Capture::default();
        let tokens = Lexer::new(source, &mut capture).scan_tokens().tokens;
        let parsed = Parser::new(&tokens, &mut capture).parse();
        (parsed, capture)
    }

    fn render(source: &str) -> Vec<String> {
        let (parsed, capture) = parse(source);
        assert!(capture.errors.is_empty(), "unexpected errors: {:?}", capture.errors);
        parsed.statements.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn addition_builds_binary_node() {
        let (parsed, _) = parse("1 + 2;");
        let expected = Expr::binary(Expr::literal(Literal::Number(1.0)),
                                    Token::new(TokenKind::Plus, "+", None, 1),
                                    Expr::literal(Literal::Number(2.0)));
        assert_eq!(parsed.statements, vec![Stmt::Expression { expr: expected }]);
    }

    #[test]
    fn precedence_ladder() {
        assert_eq!(render("1 + 2 * 3 - 4 / 5;"), vec!["(; (- (+ 1 (* 2 3)) (/ 4 5)))"]);
        assert_eq!(render("-1 < 2 == !false;"), vec!["(; (== (< (- 1) 2) (! false)))"]);
        assert_eq!(render("a or b and c;"), vec!["(; (or a (and b c)))"]);
        assert_eq!(render("(1 + 2) * 3;"), vec!["(; (* (group (+ 1 2)) 3))"]);
    }

    #[test]
    fn binary_operators_fold_left() {
        assert_eq!(render("1 - 2 - 3;"), vec!["(; (- (- 1 2) 3))"]);
        assert_eq!(render("a or b or c;"), vec!["(; (or (or a b) c))"]);
    }

    #[test]
    fn assignment_is_right_associative() {
        assert_eq!(render("a = b = 1;"), vec!["(; (= a (= b 1)))"]);
    }

    #[test]
    fn declarations_and_blocks() {
        assert_eq!(render("var a; var b = \"x\"; { print a; }"),
                   vec!["(var a)", "(var b \"x\")", "(block (print a))"]);
    }

    #[test]
    fn invalid_assignment_target() {
        let (parsed, capture) = parse("1 + a = 2;");
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].message, "Invalid assignment target.");
        assert_eq!(parsed.errors[0].token.lexeme, "=");
        assert_eq!(capture.errors, vec!["[line 1] Error at '=': Invalid assignment target."]);
        assert!(!matches!(parsed.statements[0], Stmt::Expression { expr: Expr::Assign { .. } }));
    }

    #[test]
    fn missing_paren_and_semicolon() {
        let (parsed, capture) = parse("print (1 + 2;\nprint 3");
        assert!(parsed.statements.is_empty());
        assert_eq!(capture.errors,
                   vec!["[line 1] Error at ';': Expect ')' after expression.",
                        "[line 2] Error at end: Expect ';' after value."]);
    }

    #[test]
    fn recovers_at_statement_boundary() {
        let (parsed, capture) = parse("print ;\nprint 1;\nvar = 3;\nprint 2;");
        assert_eq!(capture.errors.len(), 2);
        let rendered: Vec<_> = parsed.statements.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["(print 1)", "(print 2)"]);
    }

    #[test]
    fn expression_entry_point() {
        let mut capture = Capture::default();
        let tokens = Lexer::new("1 + 2", &mut capture).scan_tokens().tokens;
        let expr = Parser::new(&tokens, &mut capture).parse_expression();
        assert_eq!(expr.map(|e| e.to_string()), Ok("(+ 1 2)".to_string()));
    }

    #[test]
    fn expression_entry_point_rejects_invalid_target() {
        let mut capture = Capture::default();
        let tokens = Lexer::new("1 = 2", &mut capture).scan_tokens().tokens;
        let error = Parser::new(&tokens, &mut capture).parse_expression()
                                                      .expect_err("invalid target accepted");

        assert_eq!(error.message, "Invalid assignment target.");
        assert_eq!(error.token.lexeme, "=");
        assert_eq!(capture.errors, vec!["[line 1] Error at '=': Invalid assignment target."]);
    }

    #[test]
    fn long_operator_chain_is_rejected() {
        let source = format!("print 1{};\nprint 2;", " + 1".repeat(200_000));
        let (parsed, capture) = parse(&source);

        assert_eq!(capture.errors,
                   vec!["[line 1] Error at '+': Expression nesting too deep."]);
        let rendered: Vec<_> = parsed.statements.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["(print 2)"]);
    }

    #[test]
    fn deep_grouping_and_unary_are_rejected() {
        for source in [format!("{}1;", "(".repeat(10_000)),
                       format!("{}1;", "-".repeat(10_000)),
                       format!("{}1;", "!".repeat(MAX_NESTING + 1)),
                       "{".repeat(10_000)]
        {
            let (parsed, capture) = parse(&source);
            assert!(!parsed.is_clean(), "{source:.20}");
            assert!(capture.errors[0].ends_with("nesting too deep."), "{:?}", capture.errors[0]);
        }
    }

    #[test]
    fn nesting_below_the_limit_parses() {
        let chain = format!("1{};", " + 1".repeat(MAX_NESTING - 1));
        let groups = format!("{}1{};", "(".repeat(40), ")".repeat(40));
        let blocks = format!("{}{}", "{".repeat(40), "}".repeat(40));

        for source in [chain, groups, blocks] {
            let (parsed, capture) = parse(&source);
            assert!(parsed.is_clean(), "{:?}", capture.errors);
        }
    }

    #[test]
    fn reparsing_is_idempotent() {
        let source = "var x = 1; x = x + 2 * (3 - 1); print x or nil;";
        assert_eq!(parse(source).0, parse(source).0);
    }
}
