//! Validated structure of a DJcode program.

use super::symbols::PatternTable;

/// A program that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Pattern definitions in source order, redeclarations included.
    pub patterns: Vec<PatternDef>,
    pub defined: PatternTable,
    /// Playback statements, `None` when the program has no MAIN section.
    pub main: Option<Vec<PlayStatement>>,
}

impl Program {
    /// The definition a playback statement would resolve to for `key`.
    pub fn pattern(&self, key: &str) -> Option<&PatternDef> {
        self.defined.get(key).and_then(|idx| self.patterns.get(idx))
    }
}

/// A named pattern: `PATTERN NUMBER n COLON` followed by instrument groups.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternDef {
    pub number: String,
    pub groups: Vec<InstrumentGroup>,
}

/// One instrument and the sounds it plays.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentGroup {
    pub instrument: String,
    pub sounds: Vec<String>,
}

/// `PLAY PATTERN NUMBER k LOOP NUMBER n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayStatement {
    pub pattern: String,
    /// Loop count literal as written.
    pub loops: String,
}

impl PlayStatement {
    /// Loop count as an integer, `None` if it does not fit in a `u64`.
    pub fn loop_count(&self) -> Option<u64> {
        self.loops.parse().ok()
    }
}
