//! DJcode validator — token records → tokens → validated program.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod symbols;
pub mod token;
pub mod vocab;

pub use ast::*;
pub use error::{ErrorKind, ValidationError};
pub use symbols::PatternTable;
pub use token::{Token, TokenKind};

use lexer::Lexer;
use parser::Parser;

/// The DJcode validator.
///
/// Each call is an independent run; nothing is carried between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    /// Treat a repeated pattern number as an error instead of shadowing.
    pub strict_duplicates: bool,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            strict_duplicates: true,
        }
    }

    /// Validate an already-read token sequence.
    pub fn validate(&self, tokens: &[Token]) -> Result<Program, ValidationError> {
        Parser::new(tokens)
            .strict_duplicates(self.strict_duplicates)
            .parse()
    }

    /// Read token records from text, then validate them.
    pub fn validate_source(&self, source: &str) -> Result<Program, ValidationError> {
        let tokens = Lexer::new(source).tokenize()?;
        log::debug!("read {} token record(s)", tokens.len());
        self.validate(&tokens)
    }
}
