//! Error types for the DJcode validator.

use std::fmt;

/// The first fault found while reading or validating a token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub message: String,
    /// Source line of the offending record (0 when tokens came from memory).
    pub line: usize,
    /// Cursor position in the token stream when the fault was found.
    pub index: usize,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// Malformed token record.
    Lex,
    /// An expected token kind was not at the cursor.
    Structural,
    UnknownInstrument(String),
    InvalidSound { sound: String, instrument: String },
    UndefinedPattern(String),
    DuplicatePattern(String),
}

impl ValidationError {
    pub fn lex(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
            index: 0,
            kind: ErrorKind::Lex,
        }
    }

    pub fn structural(message: impl Into<String>, line: usize, index: usize) -> Self {
        Self {
            message: message.into(),
            line,
            index,
            kind: ErrorKind::Structural,
        }
    }

    pub fn unknown_instrument(instrument: &str, line: usize, index: usize) -> Self {
        Self {
            message: format!("unknown instrument '{instrument}'"),
            line,
            index,
            kind: ErrorKind::UnknownInstrument(instrument.to_string()),
        }
    }

    pub fn invalid_sound(sound: &str, instrument: &str, line: usize, index: usize) -> Self {
        Self {
            message: format!("'{sound}' is not a valid sound for instrument '{instrument}'"),
            line,
            index,
            kind: ErrorKind::InvalidSound {
                sound: sound.to_string(),
                instrument: instrument.to_string(),
            },
        }
    }

    pub fn undefined_pattern(key: &str, line: usize, index: usize) -> Self {
        Self {
            message: format!("pattern {key} used in MAIN but not defined earlier"),
            line,
            index,
            kind: ErrorKind::UndefinedPattern(key.to_string()),
        }
    }

    pub fn duplicate_pattern(key: &str, line: usize, index: usize) -> Self {
        Self {
            message: format!("pattern {key} is already defined"),
            line,
            index,
            kind: ErrorKind::DuplicatePattern(key.to_string()),
        }
    }

    /// Short category label used in reports.
    pub fn category(&self) -> &'static str {
        match self.kind {
            ErrorKind::Lex => "LexError",
            ErrorKind::Structural => "StructuralError",
            ErrorKind::UnknownInstrument(_) => "UnknownInstrumentError",
            ErrorKind::InvalidSound { .. } => "InvalidSoundError",
            ErrorKind::UndefinedPattern(_) => "UndefinedPatternReferenceError",
            ErrorKind::DuplicatePattern(_) => "DuplicatePatternError",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "[line {}] {}: {}", self.line, self.category(), self.message)
        } else {
            write!(
                f,
                "[token {}] {}: {}",
                self.index,
                self.category(),
                self.message
            )
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefers_source_line() {
        let err = ValidationError::unknown_instrument("Kazoo", 4, 3);
        assert_eq!(
            err.to_string(),
            "[line 4] UnknownInstrumentError: unknown instrument 'Kazoo'"
        );
    }

    #[test]
    fn display_falls_back_to_token_index() {
        let err = ValidationError::undefined_pattern("2", 0, 10);
        assert_eq!(
            err.to_string(),
            "[token 10] UndefinedPatternReferenceError: pattern 2 used in MAIN but not defined earlier"
        );
    }

    #[test]
    fn invalid_sound_names_both_parts() {
        let err = ValidationError::invalid_sound("boom", "Triangle", 0, 4);
        assert_eq!(
            err.kind,
            ErrorKind::InvalidSound {
                sound: "boom".into(),
                instrument: "Triangle".into()
            }
        );
        assert!(err.message.contains("boom"));
        assert!(err.message.contains("Triangle"));
    }
}
