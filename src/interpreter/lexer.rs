use crate::{
    diagnostics::Diagnostics,
    error::LexError,
    interpreter::token::{Literal, Token, TokenKind},
};

/// Hand-written single-pass lexer.
///
/// The lexer walks the source once, keeping `start` and `current` byte
/// offsets for the lexeme being scanned and a 1-based line counter that
/// advances on every newline consumed, including newlines inside string
/// literals. Lexical errors are reported to the diagnostics collaborator and
/// collected; scanning always continues with the next character.
pub struct Lexer<'a> {
    source:      &'a str,
    diagnostics: &'a mut dyn Diagnostics,
    tokens:      Vec<Token>,
    errors:      Vec<LexError>,
    start:       usize,
    current:     usize,
    line:        usize,
}

/// The result of a full scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned {
    /// The token sequence, always terminated by one `EOF` token.
    pub tokens: Vec<Token>,
    /// Every lexical error found, in source order.
    pub errors: Vec<LexError>,
}

impl Scanned {
    /// Whether the scan produced no errors.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source` that reports to `diagnostics`.
    pub fn new(source: &'a str, diagnostics: &'a mut dyn Diagnostics) -> Self {
        Self { source,
               diagnostics,
               tokens: Vec::new(),
               errors: Vec::new(),
               start: 0,
               current: 0,
               line: 1 }
    }

    /// Scans the whole source.
    ///
    /// The returned token sequence always ends with an `EOF` token carrying
    /// the final line number.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     diagnostics::Capture,
    ///     interpreter::{lexer::Lexer, token::TokenKind},
    /// };
    ///
    /// let mut capture = Capture::default();
    /// let scanned = Lexer::new("1 + 2", &mut capture).scan_tokens();
    /// let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind).collect();
    ///
    /// assert_eq!(kinds, [TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::Eof]);
    /// ```
    #[must_use]
    pub fn scan_tokens(mut self) -> Scanned {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));
        tracing::debug!(tokens = self.tokens.len(),
                        errors = self.errors.len(),
                        "scanned source");

        Scanned { tokens: self.tokens,
                  errors: self.errors }
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.match_char('/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            },
            ' ' | '\r' | '\t' => {},
            '\n' => self.line += 1,
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if is_alpha(c) => self.identifier(),
            _ => self.error("Unexpected character."),
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.peek();
        self.current += c.len_utf8();
        c
    }

    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }

        self.advance();
        true
    }

    fn add_either(&mut self, next: char, matched: TokenKind, single: TokenKind) {
        let kind = if self.match_char(next) { matched } else { single };
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_token_with_literal(kind, None);
    }

    fn add_token_with_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = &self.source[self.start..self.current];
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }

    fn error(&mut self, message: &str) {
        self.diagnostics.error(self.line, "", message);
        self.errors.push(LexError::new(self.line, message));
    }

    fn string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error("Unterminated string.");
            return;
        }

        // The closing quote.
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        self.add_token_with_literal(TokenKind::String, Some(Literal::String(value.to_string())));
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        // Digits with an optional fraction always parse; overflow gives infinity.
        let value = self.source[self.start..self.current].parse().unwrap_or(f64::INFINITY);
        self.add_token_with_literal(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        while is_alpha_numeric(self.peek()) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}

const fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diagnostics::Capture, interpreter::token::TokenKind::*};

    fn scan(source: &str) -> (Scanned, Capture) {
        let mut capture = Capture::default();
        let scanned = Lexer::new(source, &mut capture).scan_tokens();
        (scanned, capture)
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).0.tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn single_char_tokens() {
        assert_eq!(kinds("(){},.-+;*/"),
                   vec![LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus,
                        Semicolon, Star, Slash, Eof]);
    }

    #[test]
    fn one_or_two_char_tokens() {
        assert_eq!(kinds("! != = == < <= > >="),
                   vec![Bang, BangEqual, Equal, EqualEqual, Less, LessEqual, Greater,
                        GreaterEqual, Eof]);
    }

    #[test]
    fn numbers_carry_their_value() {
        for (source, expected) in [("0", 0.0), ("42", 42.0), ("2.5", 2.5), ("007.50", 7.5)] {
            let (scanned, capture) = scan(source);
            assert!(capture.errors.is_empty());
            assert_eq!(scanned.tokens.len(), 2);
            assert_eq!(scanned.tokens[0].kind, Number);
            assert_eq!(scanned.tokens[0].literal, Some(Literal::Number(expected)));
            assert_eq!(scanned.tokens[1].kind, Eof);
        }
    }

    #[test]
    fn oversized_number_is_infinite() {
        let source = format!("1{}", "0".repeat(400));
        let (scanned, capture) = scan(&source);
        assert!(capture.errors.is_empty());
        assert_eq!(scanned.tokens[0].literal, Some(Literal::Number(f64::INFINITY)));
    }

    #[test]
    fn trailing_dot_is_not_part_of_number() {
        let (scanned, _) = scan("12.");
        let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![Number, Dot, Eof]);
        assert_eq!(scanned.tokens[0].lexeme, "12");
    }

    #[test]
    fn comment_is_skipped_and_line_advances() {
        let (scanned, _) = scan("// comment\n1");
        assert_eq!(scanned.tokens.len(), 2);
        assert_eq!(scanned.tokens[0].kind, Number);
        assert_eq!(scanned.tokens[0].line, 2);
        assert_eq!(scanned.tokens[1].line, 2);
    }

    #[test]
    fn string_literal_excludes_quotes() {
        let (scanned, _) = scan("\"hello world\"");
        assert_eq!(scanned.tokens[0].kind, String);
        assert_eq!(scanned.tokens[0].lexeme, "\"hello world\"");
        assert_eq!(scanned.tokens[0].literal,
                   Some(Literal::String("hello world".to_string())));
    }

    #[test]
    fn multiline_string_advances_line() {
        let (scanned, _) = scan("\"a\nb\"\nx");
        assert_eq!(scanned.tokens[0].line, 2);
        assert_eq!(scanned.tokens[1].kind, Identifier);
        assert_eq!(scanned.tokens[1].line, 3);
    }

    #[test]
    fn unterminated_string_reports_once() {
        let (scanned, capture) = scan("\"abc");
        assert_eq!(scanned.errors, vec![LexError::new(1, "Unterminated string.")]);
        assert_eq!(capture.errors, vec!["[line 1] Error: Unterminated string."]);
        let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![Eof]);
    }

    #[test]
    fn unexpected_characters_are_all_collected() {
        let (scanned, capture) = scan("1 @ 2\n#");
        let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![Number, Number, Eof]);
        assert_eq!(scanned.errors,
                   vec![LexError::new(1, "Unexpected character."),
                        LexError::new(2, "Unexpected character.")]);
        assert_eq!(capture.errors.len(), 2);
    }

    #[test]
    fn digits_and_letters_are_not_flagged() {
        let (scanned, capture) = scan("abc 123 _x1");
        assert!(scanned.is_clean());
        assert!(capture.errors.is_empty());
    }

    #[test]
    fn identifiers_and_keywords() {
        let (scanned, _) = scan("var foo = true and nil;");
        let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![Var, Identifier, Equal, True, And, Nil, Semicolon, Eof]);
        assert_eq!(scanned.tokens[1].lexeme, "foo");
    }

    #[test]
    fn rescanning_is_idempotent() {
        let source = "print (1 + x) * \"s\";\n// c\ny = 2;";
        assert_eq!(scan(source).0, scan(source).0);
    }
}
