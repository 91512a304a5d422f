use crate::{
    ast::Stmt,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses one declaration, recovering from any syntax error inside it.
    ///
    /// Grammar: `declaration := varDecl | statement`
    ///
    /// On error the failure is recorded, the parser synchronizes to the next
    /// statement boundary and `None` is returned.
    pub(in crate::interpreter::parser) fn declaration(&mut self) -> Option<Stmt> {
        let depth = self.depth();
        let result = if self.match_any(&[TokenKind::Var]).is_some() {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(statement) => Some(statement),
            Err(error) => {
                tracing::trace!(line = error.line(), message = %error.message, "syntax error");
                self.reset_depth(depth);
                self.record(error);
                self.synchronize();
                None
            },
        }
    }

    /// Grammar: `varDecl := "var" IDENTIFIER ( "=" expression )? ";"`
    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.match_any(&[TokenKind::Equal]).is_some() {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var { name, initializer })
    }

    /// Grammar: `statement := printStmt | block | exprStmt`
    fn statement(&mut self) -> ParseResult<Stmt> {
        if self.match_any(&[TokenKind::Print]).is_some() {
            return self.print_statement();
        }
        if let Some(brace) = self.match_any(&[TokenKind::LeftBrace]) {
            self.nest(&brace, "Block nesting too deep.")?;
            let statements = self.block()?;
            self.unnest(1);
            return Ok(Stmt::Block { statements });
        }

        self.expression_statement()
    }

    /// Grammar: `printStmt := "print" expression ";"`
    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print { expr })
    }

    /// Grammar: `exprStmt := expression ";"`
    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression { expr })
    }

    /// Parses the inside of a block, after its opening `{`.
    ///
    /// Grammar: `block := "{" declaration* "}"`
    ///
    /// Errors inside the block are recovered from statement by statement;
    /// only a missing closing brace fails the block itself.
    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }
}
