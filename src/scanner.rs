use crate::{
    error::{Error, Result},
    token::{Token, TokenKind},
    value::Literal,
};
use log::{debug, trace, warn};
use peekmore::{PeekMore, PeekMoreIterator};
use std::str::Chars;

type Scanned = (TokenKind, Option<Literal>);

pub struct Scanner<'a> {
    src: PeekMoreIterator<Chars<'a>>,
    lexeme_buffer: String,
    line: usize,
    start_line: usize,
}

/// Yields one item per token or lexical error, in source order. The
/// end-of-input token is only added by [`Scanner::scan_tokens`].
impl <'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        loop {
            self.lexeme_buffer.clear();
            self.start_line = self.line;

            let next_char = self.src.next()?;
            self.lexeme_buffer.push(next_char);

            if let Some(scanned) = self.next_token_kind(next_char) {
                let lexeme = std::mem::take(&mut self.lexeme_buffer);
                let line = self.start_line;
                return Some(scanned.map(|(kind, literal)| Token { kind, lexeme, literal, line }));
            }
        }
    }
}

impl <'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.chars().peekmore(),
            lexeme_buffer: String::new(),
            line: 1,
            start_line: 1,
        }
    }

    /// Scans the whole input. Lexical errors never stop the scan; they are
    /// collected alongside the tokens, which always end with `EndOfFile`.
    pub fn scan_tokens(mut self) -> Scan {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        for scanned in self.by_ref() {
            match scanned {
                Ok(token) => {
                    trace!("token {}", token);
                    tokens.push(token);
                },
                Err(e) => {
                    warn!("{}", e);
                    errors.push(e);
                },
            }
        }
        tokens.push(Token::end_of_file(self.line));

        debug!("scanned {} tokens, {} lexical errors", tokens.len(), errors.len());
        Scan { tokens, errors }
    }

    fn next_token_kind(&mut self, next_char: char) -> Option<Result<Scanned>> {
        use TokenKind::*;
        let kind = match next_char {
            '(' => LeftParen,
            ')' => RightParen,
            '{' => LeftBrace,
            '}' => RightBrace,
            ',' => Comma,
            '.' => Dot,
            '-' => Minus,
            '+' => Plus,
            ';' => Semicolon,
            '*' => Star,
            '!' => if self.does_next_match('=') { BangEqual } else { Bang },
            '=' => if self.does_next_match('=') { EqualEqual } else { Equal },
            '<' => if self.does_next_match('=') { LessEqual } else { Less },
            '>' => if self.does_next_match('=') { GreaterEqual } else { Greater },
            '/' => {
                if self.does_next_match('/') { // comment runs to the end of the line
                    self.advance_until_match('\n');
                    return None
                }
                Slash
            },
            ' ' | '\r' | '\t' => return None,
            '\n' => {
                self.line += 1;
                return None
            },
            '"' => return Some(self.extract_string()),
            c if c.is_ascii_digit() => return Some(self.extract_number()),
            c if can_start_identifier(&c) => return Some(Ok(self.extract_identifier())),
            c => return Some(Err(Error::lexical(self.line, format!("Unexpected character: {}", c)))),
        };
        Some(Ok((kind, None)))
    }

    fn does_next_match(&mut self, c: char) -> bool {
        match self.src.peek() {
            Some(next) if c == *next => {
                self.lexeme_buffer.push(c);
                self.src.next();
                true
            }
            _ => false,
        }
    }

    fn extract_string(&mut self) -> Result<Scanned> {
        let mut newline_count = 0;
        self.advance_until_match_for_each('"', |c| if c == '\n' { newline_count += 1 });
        self.line += newline_count;
        match self.src.next() {
            None => Err(Error::lexical(self.start_line, "Unterminated string.")),
            Some(q) => { // q must be '"' here
                self.lexeme_buffer.push(q);
                let contents = &self.lexeme_buffer[1..self.lexeme_buffer.len() - 1];
                Ok((TokenKind::String, Some(Literal::String(contents.to_string()))))
            },
        }
    }

    fn extract_number(&mut self) -> Result<Scanned> {
        self.advance_until(|n| !n.is_ascii_digit());

        if let Some(&'.') = self.src.peek() {
            let has_fraction = self.src.peek_nth(1).map_or(false, |c| c.is_ascii_digit());
            if has_fraction {
                self.lexeme_buffer.push('.');
                self.src.next();
                self.advance_until(|n| !n.is_ascii_digit());
            }
        }

        // Digits with at most one `.digits` part always parse; overflow gives `inf`.
        match self.lexeme_buffer.parse() {
            Err(_) => Err(Error::lexical(
                self.line,
                format!("Could not convert {} into a number", self.lexeme_buffer)
            )),
            Ok(number) => Ok((TokenKind::Number, Some(Literal::Number(number)))),
        }
    }

    fn extract_identifier(&mut self) -> Scanned {
        self.advance_until(|n| !is_part_of_valid_identifier(n));

        let kind = TokenKind::keyword(&self.lexeme_buffer).unwrap_or(TokenKind::Identifier);
        (kind, None)
    }

    fn advance_until_match(&mut self, c: char) {
        self.advance_until(|n| n == &c)
    }

    fn advance_until(&mut self, should_stop: impl Fn(&char) -> bool) {
        self.advance_until_for_each(should_stop, |_| {})
    }

    fn advance_until_match_for_each(&mut self, c: char, f: impl FnMut(char)) {
        self.advance_until_for_each(|n| n == &c, f);
    }

    fn advance_until_for_each(
        &mut self,
        should_stop: impl Fn(&char) -> bool,
        mut f: impl FnMut(char)
    ) {
        while let Some(next) = self.src.peek() {
            if should_stop(next) { break }
            let next = *next;
            self.src.next();
            self.lexeme_buffer.push(next);
            f(next);
        }
    }
}

fn can_start_identifier(c: &char) -> bool {
    c.is_ascii_alphabetic() || c == &'_'
}

fn is_part_of_valid_identifier(c: &char) -> bool {
    can_start_identifier(c) || c.is_ascii_digit()
}

/// The outcome of scanning one source text.
#[derive(Debug)]
pub struct Scan {
    tokens: Vec<Token>,
    errors: Vec<Error>,
}

impl Scan {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<Error>) {
        (self.tokens, self.errors)
    }
}
