use std::iter::Peekable;

use log::debug;

use crate::{
    error::{Error, Result},
    expr::Expr,
    token::*,
    value::Literal,
};

const EQUALITY_TOKENS: &[TokenKind] = &[
    TokenKind::BangEqual,
    TokenKind::EqualEqual,
];

const COMPARISON_TOKENS: &[TokenKind] = &[
    TokenKind::Greater,
    TokenKind::GreaterEqual,
    TokenKind::Less,
    TokenKind::LessEqual,
];

const TERM_TOKENS: &[TokenKind] = &[
    TokenKind::Minus,
    TokenKind::Plus,
];

const FACTOR_TOKENS: &[TokenKind] = &[
    TokenKind::Star,
    TokenKind::Slash,
];

const UNARY_TOKENS: &[TokenKind] = &[
    TokenKind::Bang,
    TokenKind::Minus,
];

/// Recursive-descent parser for a single expression.
///
/// ```text
/// expression → equality
/// equality   → comparison ( ( "!=" | "==" ) comparison )*
/// comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
/// term       → factor ( ( "-" | "+" ) factor )*
/// factor     → unary ( ( "/" | "*" ) unary )*
/// unary      → ( "!" | "-" ) unary | primary
/// primary    → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
/// ```
pub struct Parser<T> {
    tokens: T,
}

impl <T: Iterator<Item = Token>> Parser<Peekable<T>> {
    pub fn new(tokens: T) -> Self {
        let tokens = tokens.peekable();
        Parser { tokens }
    }

    /// Parses one expression. Anything after it is left unread.
    pub fn parse(&mut self) -> Result<Expr> {
        debug!("parsing expression");
        let parsed = self.expression();
        if let Err(e) = &parsed {
            debug!("parse aborted: {}", e);
        }
        parsed
    }

    fn expression(&mut self) -> Result<Expr> {
        self.equality()
    }

    fn equality(&mut self) -> Result<Expr> {
        self.match_binary_precedence_with_tokens(Self::comparison, EQUALITY_TOKENS)
    }

    fn comparison(&mut self) -> Result<Expr> {
        self.match_binary_precedence_with_tokens(Self::term, COMPARISON_TOKENS)
    }

    fn term(&mut self) -> Result<Expr> {
        self.match_binary_precedence_with_tokens(Self::factor, TERM_TOKENS)
    }

    fn factor(&mut self) -> Result<Expr> {
        self.match_binary_precedence_with_tokens(Self::unary, FACTOR_TOKENS)
    }

    fn unary(&mut self) -> Result<Expr> {
        if let Some(token) = self.match_any(UNARY_TOKENS) {
            let right = Box::new(self.unary()?);
            Ok(Expr::new_unary(token, right))
        } else {
            self.primary()
        }
    }

    fn primary(&mut self) -> Result<Expr> {
        let next = self.tokens.peek().ok_or_else(Error::unexpected)?;

        let literal = match next.kind {
            TokenKind::True => Some(Literal::Bool(true)),
            TokenKind::False => Some(Literal::Bool(false)),
            TokenKind::Nil => Some(Literal::Nil),
            TokenKind::Number | TokenKind::String => next.literal.clone(),
            _ => None,
        };
        if let Some(value) = literal {
            self.tokens.next();
            return Ok(Expr::new_literal(value))
        }

        if self.match_single(TokenKind::LeftParen).is_some() {
            let expression = Box::new(self.expression()?);
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::new_grouping(expression))
        }

        Err(self.error_at_next("Expect expression."))
    }

    fn consume(&mut self, kind: TokenKind, error_msg: &str) -> Result<Token> {
        match self.match_single(kind) {
            Some(token) => Ok(token),
            None => Err(self.error_at_next(error_msg)),
        }
    }

    /// Reports at the token that could not be matched, without consuming it.
    fn error_at_next(&mut self, message: &str) -> Error {
        match self.tokens.peek() {
            Some(t) => Error::syntactic(t.clone(), message),
            None => Error::unexpected(),
        }
    }

    fn match_binary_precedence_with_tokens(
        &mut self,
        parse: impl Fn(&mut Self) -> Result<Expr>,
        kinds: &[TokenKind]
    ) -> Result<Expr> {
        let mut e = parse(self)?;

        while let Some(token) = self.match_any(kinds) {
            let right = Box::new(parse(self)?);
            e = Expr::new_binary(Box::new(e), token, right)
        }

        Ok(e)
    }

    fn check_next(&mut self, kind: TokenKind) -> bool {
        self.tokens.peek()
            .map(|t| t.kind == kind)
            .unwrap_or(false)
    }

    fn match_single(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check_next(kind) {
            self.tokens.next()
        } else {
            None
        }
    }

    fn match_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        kinds.iter().find_map(|k| self.match_single(*k))
    }
}
