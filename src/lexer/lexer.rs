use crate::{
    errors::errors::{Error, ErrorImpl, Reporter},
    MK_TOKEN,
};

use super::{
    number::parse_number,
    tokens::{lookup_identifier, Literal, Token, TokenKind},
};

/// Single-pass scanner state. `start` and `current` are byte offsets into
/// `source` with `start <= current <= source.len()`.
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub fn scan_tokens(mut self, reporter: &mut Reporter) -> Vec<Token> {
        while !self.at_eof() {
            self.start = self.current;
            self.scan_token(reporter);
        }

        let line = self.line;
        self.tokens
            .push(MK_TOKEN!(TokenKind::EOF, String::new(), None, line));
        self.tokens
    }

    fn scan_token(&mut self, reporter: &mut Reporter) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '(' => self.push(TokenKind::LeftParen),
            ')' => self.push(TokenKind::RightParen),
            '{' => self.push(TokenKind::LeftBrace),
            '}' => self.push(TokenKind::RightBrace),
            ',' => self.push(TokenKind::Comma),
            '.' => self.push(TokenKind::Dot),
            '-' => self.push(TokenKind::Minus),
            '+' => self.push(TokenKind::Plus),
            ';' => self.push(TokenKind::Semicolon),
            '*' => self.push(TokenKind::Star),
            '!' => {
                let kind = if self.matches('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.push(kind);
            }
            '=' => {
                let kind = if self.matches('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.push(kind);
            }
            '<' => {
                let kind = if self.matches('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.push(kind);
            }
            '>' => {
                let kind = if self.matches('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.push(kind);
            }
            '/' => {
                if self.matches('/') {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.push(TokenKind::Slash);
                }
            }
            ' ' | '\t' | '\r' => {}
            '\n' => self.line += 1,
            '"' => self.string(reporter),
            c if c.is_ascii_digit() => self.number(reporter),
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
            character => reporter.error(&Error::new(
                ErrorImpl::UnexpectedCharacter { character },
                self.line,
            )),
        }
    }

    fn string(&mut self, reporter: &mut Reporter) {
        let line = self.line;

        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            reporter.error(&Error::new(ErrorImpl::UnterminatedString, self.line));
            return;
        }

        // closing quote
        self.advance();

        let value = self.source[self.start + 1..self.current - 1].to_string();
        let lexeme = self.lexeme().to_string();
        self.tokens.push(MK_TOKEN!(
            TokenKind::String,
            lexeme,
            Some(Literal::String(value)),
            line
        ));
    }

    fn number(&mut self, reporter: &mut Reporter) {
        self.consume_digits();

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.consume_digits();
        }

        match parse_number(self.lexeme()) {
            Ok(value) => self.push_literal(TokenKind::Number, Some(Literal::Number(value))),
            Err(error) => reporter.error(&Error::new(error, self.line)),
        }
    }

    fn identifier(&mut self) {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let kind = lookup_identifier(self.lexeme());
        self.push(kind);
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn push(&mut self, kind: TokenKind) {
        self.push_literal(kind, None);
    }

    fn push_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.lexeme().to_string();
        self.tokens.push(MK_TOKEN!(kind, lexeme, literal, self.line));
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    /// Consumes the next character only if it is `expected`.
    fn matches(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }

        self.current += expected.len_utf8();
        true
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }
}

/// Scans `source` into tokens, always ending with a single `EOF` token.
///
/// Malformed input never aborts the scan: each problem is sent to `reporter`
/// and the offending lexeme is dropped.
pub fn tokenize(source: &str, reporter: &mut Reporter) -> Vec<Token> {
    Lexer::new(source).scan_tokens(reporter)
}
