use std::io::{self, Write};

use log::info;

use crate::{parser::Parser, printer, scanner::Scanner};

/// Exit status for a clean run.
pub const EX_OK: i32 = 0;
/// Exit status when the input had a lexical or syntax error.
pub const EX_DATAERR: i32 = 65;

/// Runs the front end over one source text, writing results to `out` and
/// diagnostics to `err_out`, and reports the exit status to use.
pub struct Lox<Out, ErrOut> {
    out: Out,
    err_out: ErrOut,
}

impl <Out: Write, ErrOut: Write> Lox<Out, ErrOut> {
    pub fn new(out: Out, err_out: ErrOut) -> Self {
        Self { out, err_out }
    }

    /// Prints every token, one per line.
    pub fn tokenize(&mut self, source: &str) -> io::Result<i32> {
        info!("tokenizing {} bytes", source.len());
        let (tokens, errors) = Scanner::new(source).scan_tokens().into_parts();

        for e in errors.iter() {
            writeln!(self.err_out, "{}", e)?;
        }
        for token in tokens.iter() {
            writeln!(self.out, "{}", token)?;
        }

        Ok(if errors.is_empty() { EX_OK } else { EX_DATAERR })
    }

    /// Prints the parsed expression tree. Nothing reaches `out` on failure.
    pub fn parse(&mut self, source: &str) -> io::Result<i32> {
        info!("parsing {} bytes", source.len());
        let (tokens, errors) = Scanner::new(source).scan_tokens().into_parts();

        if !errors.is_empty() {
            for e in errors.iter() {
                writeln!(self.err_out, "{}", e)?;
            }
            return Ok(EX_DATAERR)
        }

        match Parser::new(tokens.into_iter()).parse() {
            Ok(expr) => {
                writeln!(self.out, "{}", printer::print(&expr))?;
                Ok(EX_OK)
            },
            Err(e) => {
                writeln!(self.err_out, "{}", e)?;
                Ok(EX_DATAERR)
            },
        }
    }

    pub fn into_inner(self) -> (Out, ErrOut) {
        (self.out, self.err_out)
    }
}
