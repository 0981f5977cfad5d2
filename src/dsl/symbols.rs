//! Table of defined pattern keys.

use std::collections::BTreeMap;

/// Pattern keys declared in the pattern section, each mapped to the index of
/// its latest definition in [`Program::patterns`](super::ast::Program).
/// Keys are the NUMBER literal text, compared exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternTable {
    entries: BTreeMap<String, usize>,
}

impl PatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` as defined at `index`. A later definition of the same key
    /// shadows the earlier one; the shadowed index is returned.
    pub fn define(&mut self, key: &str, index: usize) -> Option<usize> {
        self.entries.insert(key.to_string(), index)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries.get(key).copied()
    }

    /// Defined keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table() {
        let table = PatternTable::new();
        assert!(table.is_empty());
        assert!(!table.contains("1"));
    }

    #[test]
    fn redefinition_shadows() {
        let mut table = PatternTable::new();
        assert_eq!(table.define("1", 0), None);
        assert_eq!(table.define("2", 1), None);
        assert_eq!(table.define("1", 2), Some(0));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("1"), Some(2));
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn keys_compare_as_text() {
        let mut table = PatternTable::new();
        table.define("01", 0);
        assert!(table.contains("01"));
        assert!(!table.contains("1"));
    }
}
