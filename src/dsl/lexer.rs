//! Token record reader.
//!
//! The upstream tokenizer writes one record per line: a keyword, optionally
//! followed by a single literal (`NUMBER 12`, `INSTRUMENT Drum`, `COLON`).
//! This module decodes those records into [`Token`]s. Blank lines are skipped.

use super::error::ValidationError;
use super::token::{Token, TokenKind};

pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, ValidationError> {
        let mut tokens = Vec::new();

        for (idx, raw) in self.source.lines().enumerate() {
            let line = idx + 1;
            let record = raw.trim();
            if record.is_empty() {
                continue;
            }
            let kind = Self::read_record(record, line)?;
            log::trace!("line {line}: {kind}");
            tokens.push(Token::at_line(kind, line));
        }

        Ok(tokens)
    }

    fn read_record(record: &str, line: usize) -> Result<TokenKind, ValidationError> {
        let mut parts = record.split_whitespace();
        let keyword = parts.next().unwrap_or_default();
        let literal = parts.next();
        if let Some(extra) = parts.next() {
            return Err(ValidationError::lex(
                format!("unexpected text '{extra}' after {keyword} record"),
                line,
            ));
        }

        match keyword {
            "PATTERN" => Self::bare(TokenKind::Pattern, literal, line),
            "COLON" => Self::bare(TokenKind::Colon, literal, line),
            "MAIN" => Self::bare(TokenKind::Main, literal, line),
            "PLAY" => Self::bare(TokenKind::Play, literal, line),
            "LOOP" => Self::bare(TokenKind::Loop, literal, line),
            "NUMBER" => {
                let text = Self::required(keyword, literal, line)?;
                if !text.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ValidationError::lex(
                        format!("invalid number literal '{text}'"),
                        line,
                    ));
                }
                Ok(TokenKind::number(text))
            }
            "INSTRUMENT" => {
                let name = Self::required(keyword, literal, line)?;
                Ok(TokenKind::Instrument(name.to_string()))
            }
            "INSTRUMENT_SOUND" => {
                let name = Self::required(keyword, literal, line)?;
                Ok(TokenKind::InstrumentSound(name.to_string()))
            }
            _ => Err(ValidationError::lex(
                format!("unknown token keyword '{keyword}'"),
                line,
            )),
        }
    }

    fn bare(
        kind: TokenKind,
        literal: Option<&str>,
        line: usize,
    ) -> Result<TokenKind, ValidationError> {
        match literal {
            None => Ok(kind),
            Some(text) => Err(ValidationError::lex(
                format!("{} takes no literal, got '{text}'", kind.keyword()),
                line,
            )),
        }
    }

    fn required<'r>(
        keyword: &str,
        literal: Option<&'r str>,
        line: usize,
    ) -> Result<&'r str, ValidationError> {
        literal.ok_or_else(|| ValidationError::lex(format!("{keyword} requires a literal"), line))
    }
}
