//! Recursive-descent validator for DJcode token streams.
//!
//! Grammar:
//!
//! ```text
//! program     := pattern_def* main?
//! pattern_def := PATTERN NUMBER COLON group*
//! group       := INSTRUMENT INSTRUMENT_SOUND+
//! main        := MAIN COLON play+
//! play        := PLAY PATTERN NUMBER LOOP NUMBER
//! ```
//!
//! Instrument and sound names are checked against [`vocab`] as they are
//! read, and every pattern played in MAIN must have been defined above it.
//! The first fault ends the run.

use super::ast::*;
use super::error::ValidationError;
use super::symbols::PatternTable;
use super::token::{Token, TokenKind};
use super::vocab;

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    strict_duplicates: bool,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            strict_duplicates: false,
        }
    }

    /// Reject a pattern number that is declared twice instead of letting the
    /// later declaration shadow the earlier one.
    pub fn strict_duplicates(mut self, strict: bool) -> Self {
        self.strict_duplicates = strict;
        self
    }

    pub fn parse(&mut self) -> Result<Program, ValidationError> {
        let mut patterns = Vec::new();
        let mut defined = PatternTable::new();

        self.parse_pattern_section(&mut patterns, &mut defined)?;

        let main = if self.check(&TokenKind::Main) {
            Some(self.parse_main_section(&defined)?)
        } else {
            None
        };

        if let Some(t) = self.peek() {
            return Err(ValidationError::structural(
                format!("unexpected token at end: {}", t.kind),
                t.line,
                self.pos,
            ));
        }

        Ok(Program {
            patterns,
            defined,
            main,
        })
    }

    fn parse_pattern_section(
        &mut self,
        patterns: &mut Vec<PatternDef>,
        defined: &mut PatternTable,
    ) -> Result<(), ValidationError> {
        while self.check(&TokenKind::Pattern) {
            let start = self.pos;
            let pattern = self.parse_named_pattern()?;

            if self.strict_duplicates && defined.contains(&pattern.number) {
                return Err(ValidationError::duplicate_pattern(
                    &pattern.number,
                    self.tokens[start + 1].line,
                    start + 1,
                ));
            }
            if let Some(prev) = defined.define(&pattern.number, patterns.len()) {
                log::debug!(
                    "pattern {} redefined, shadowing definition #{prev}",
                    pattern.number
                );
            }
            log::debug!(
                "defined pattern {} with {} instrument group(s)",
                pattern.number,
                pattern.groups.len()
            );
            patterns.push(pattern);
        }
        Ok(())
    }

    fn parse_named_pattern(&mut self) -> Result<PatternDef, ValidationError> {
        self.expect(TokenKind::Pattern, "PATTERN")?;
        let number = self.expect_number("NUMBER after PATTERN")?;
        self.expect(TokenKind::Colon, "COLON after pattern number")?;
        let groups = self.parse_instrument_sequence()?;
        Ok(PatternDef { number, groups })
    }

    fn parse_instrument_sequence(&mut self) -> Result<Vec<InstrumentGroup>, ValidationError> {
        let mut groups = Vec::new();
        while let Some(Token {
            kind: TokenKind::Instrument(name),
            ..
        }) = self.peek()
        {
            let name = name.clone();
            groups.push(self.parse_instrument_group(name)?);
        }
        Ok(groups)
    }

    fn parse_instrument_group(
        &mut self,
        instrument: String,
    ) -> Result<InstrumentGroup, ValidationError> {
        let line = self.current_line();
        let Some(valid_sounds) = vocab::sounds_for(&instrument) else {
            return Err(ValidationError::unknown_instrument(
                &instrument,
                line,
                self.pos,
            ));
        };
        self.advance();

        let mut sounds = Vec::new();
        while let Some(Token {
            kind: TokenKind::InstrumentSound(sound),
            line,
        }) = self.peek()
        {
            if !valid_sounds.contains(&sound.as_str()) {
                return Err(ValidationError::invalid_sound(
                    sound,
                    &instrument,
                    *line,
                    self.pos,
                ));
            }
            sounds.push(sound.clone());
            self.advance();
        }

        if sounds.is_empty() {
            return Err(ValidationError::structural(
                format!(
                    "instrument '{instrument}' declared with no sound, found {}",
                    self.describe_current()
                ),
                self.current_line(),
                self.pos,
            ));
        }

        Ok(InstrumentGroup { instrument, sounds })
    }

    fn parse_main_section(
        &mut self,
        defined: &PatternTable,
    ) -> Result<Vec<PlayStatement>, ValidationError> {
        self.expect(TokenKind::Main, "MAIN")?;
        self.expect(TokenKind::Colon, "COLON after MAIN")?;

        let mut statements = vec![self.parse_play_statement(defined)?];
        while !self.is_at_end() {
            statements.push(self.parse_play_statement(defined)?);
        }
        Ok(statements)
    }

    fn parse_play_statement(
        &mut self,
        defined: &PatternTable,
    ) -> Result<PlayStatement, ValidationError> {
        self.expect(TokenKind::Play, "PLAY")?;
        self.expect(TokenKind::Pattern, "PATTERN after PLAY")?;

        let line = self.current_line();
        let index = self.pos;
        let pattern = self.expect_number("NUMBER after PATTERN")?;
        if !defined.contains(&pattern) {
            return Err(ValidationError::undefined_pattern(&pattern, line, index));
        }

        self.expect(TokenKind::Loop, "LOOP")?;
        let loops = self.expect_number("NUMBER after LOOP")?;

        Ok(PlayStatement { pattern, loops })
    }

    // --- Helpers ---

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        if let Some(t) = self.peek() {
            log::debug!("{}", t.kind);
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek().is_some_and(|t| &t.kind == kind)
    }

    /// Line of the token at the cursor, or of the last token at end of input.
    fn current_line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(0, |t| t.line)
    }

    fn describe_current(&self) -> String {
        match self.peek() {
            Some(t) => t.kind.to_string(),
            None => "end of input".to_string(),
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<(), ValidationError> {
        if self.check(&kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_number(&mut self, expected: &str) -> Result<String, ValidationError> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Number(digits),
                ..
            }) => {
                self.advance();
                Ok(digits.clone())
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn unexpected(&self, expected: &str) -> ValidationError {
        ValidationError::structural(
            format!("expected {expected}, found {}", self.describe_current()),
            self.current_line(),
            self.pos,
        )
    }
}
