//! Scanner, expression parser and tree printer for the Lox language.
//!
//! ```
//! let expr = lox_front::parse("-(1 + 2) * 3").unwrap();
//! assert_eq!("(* (- (group (+ 1.0 2.0))) 3.0)", lox_front::printer::print(&expr));
//! ```

pub mod error;
pub mod expr;
pub mod lox;
pub mod parser;
pub mod printer;
pub mod scanner;
pub mod token;
pub mod value;

pub use crate::{
    error::{Error, ErrorKind, Result},
    expr::{Expr, Visitor},
    parser::Parser,
    scanner::{Scan, Scanner},
    token::{Token, TokenKind},
    value::Literal,
};

pub fn scan(source: &str) -> Scan {
    Scanner::new(source).scan_tokens()
}

/// Scans and parses `source`, failing on the first lexical or syntax error.
pub fn parse(source: &str) -> Result<Expr> {
    let (tokens, errors) = scan(source).into_parts();
    if let Some(e) = errors.into_iter().next() {
        return Err(e)
    }
    Parser::new(tokens.into_iter()).parse()
}
