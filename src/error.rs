use std::result;
use std::fmt::{self, Display};

use crate::token::{Token, TokenKind};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    Lexical { line: usize },
    Syntactic { token: Token },
    Unexpected,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn lexical<S: Into<String>>(line: usize, message: S) -> Error {
        let kind = ErrorKind::Lexical { line };
        Error { kind, message: message.into() }
    }

    pub fn syntactic<S: Into<String>>(token: Token, message: S) -> Error {
        let kind = ErrorKind::Syntactic { token };
        Error { kind, message: message.into() }
    }

    /// The token stream ran out before an end-of-input token was seen.
    pub fn unexpected() -> Error {
        let kind = ErrorKind::Unexpected;
        Error { kind, message: "Unexpected end of input.".into() }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> usize {
        match self.kind() {
            ErrorKind::Lexical { line } => *line,
            ErrorKind::Syntactic { token } => token.line,
            ErrorKind::Unexpected => 0,
        }
    }

    fn loc(&self) -> String {
        match self.kind() {
            ErrorKind::Syntactic { token } => {
                if token.kind == TokenKind::EndOfFile {
                    " at end".to_string()
                } else {
                    format!(" at '{}'", token.lexeme)
                }
            },
            _ => "".to_string(),
        }
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error{}: {}", self.line(), self.loc(), self.message)
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> std::io::Error {
        use std::io::ErrorKind::*;
        std::io::Error::new(Other, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_errors_have_no_location() {
        let e = Error::lexical(3, "Unexpected character: @");
        assert_eq!("[line 3] Error: Unexpected character: @", e.to_string());
        assert!(matches!(e.kind(), ErrorKind::Lexical { line: 3 }));
    }

    #[test]
    fn syntactic_errors_point_at_the_token() {
        let token = Token::new(TokenKind::RightParen, ")", None, 2);
        let e = Error::syntactic(token, "Expect expression.");
        assert_eq!("[line 2] Error at ')': Expect expression.", e.to_string());
        assert_eq!(2, e.line());
        assert!(matches!(e.kind(), ErrorKind::Syntactic { .. }));
    }

    #[test]
    fn syntactic_errors_at_end_of_input() {
        let e = Error::syntactic(Token::end_of_file(5), "Expect ')' after expression.");
        assert_eq!("[line 5] Error at end: Expect ')' after expression.", e.to_string());
    }

    #[test]
    fn converts_into_io_error() {
        let e: std::io::Error = Error::unexpected().into();
        assert_eq!(std::io::ErrorKind::Other, e.kind());
        assert_eq!("[line 0] Error: Unexpected end of input.", e.to_string());
    }
}
