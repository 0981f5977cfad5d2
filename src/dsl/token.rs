//! Token types for DJcode token records.

use std::fmt;

/// A token read from one record of the token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based source line of the record, 0 for tokens built in memory.
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Self { kind, line: 0 }
    }

    pub fn at_line(kind: TokenKind, line: usize) -> Self {
        Self { kind, line }
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Markers
    Pattern,
    Colon,
    Main,
    Play,
    Loop,

    // Markers carrying a literal. NUMBER keeps its digits verbatim, so
    // `01` and `1` stay distinct keys.
    Number(String),
    Instrument(String),
    InstrumentSound(String),
}

impl TokenKind {
    pub fn number(digits: impl Into<String>) -> Self {
        TokenKind::Number(digits.into())
    }

    /// The record keyword for this kind, as written upstream.
    pub fn keyword(&self) -> &'static str {
        match self {
            TokenKind::Pattern => "PATTERN",
            TokenKind::Colon => "COLON",
            TokenKind::Main => "MAIN",
            TokenKind::Play => "PLAY",
            TokenKind::Loop => "LOOP",
            TokenKind::Number(_) => "NUMBER",
            TokenKind::Instrument(_) => "INSTRUMENT",
            TokenKind::InstrumentSound(_) => "INSTRUMENT_SOUND",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "NUMBER {n}"),
            TokenKind::Instrument(name) => write!(f, "INSTRUMENT {name}"),
            TokenKind::InstrumentSound(name) => write!(f, "INSTRUMENT_SOUND {name}"),
            other => f.write_str(other.keyword()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_record_format() {
        assert_eq!(TokenKind::number("12").to_string(), "NUMBER 12");
        assert_eq!(
            TokenKind::Instrument("Drum".into()).to_string(),
            "INSTRUMENT Drum"
        );
        assert_eq!(
            TokenKind::InstrumentSound("boom".into()).to_string(),
            "INSTRUMENT_SOUND boom"
        );
        assert_eq!(TokenKind::Colon.to_string(), "COLON");
    }

    #[test]
    fn in_memory_tokens_have_no_line() {
        assert_eq!(Token::new(TokenKind::Main).line, 0);
        assert_eq!(Token::at_line(TokenKind::Main, 7).line, 7);
    }
}
