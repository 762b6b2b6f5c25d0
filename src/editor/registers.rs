//! Register lists and the ordering rules derived from them.
//!
//! A register list is the user-configured string of symbols that may carry
//! a mark, e.g. `"hjkl"`. Its order doubles as the display order when
//! sort-by-list is enabled. Symbols are compared exactly, with no case
//! folding.

use super::marks::Mark;
use std::cmp::Ordering;

/// An ordered list of distinct register symbols.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterList {
    symbols: Vec<String>,
}

impl RegisterList {
    /// Builds a register list from a configured string, one symbol per
    /// character. Whitespace is skipped and repeated symbols keep their
    /// first position.
    pub fn parse(list: &str) -> Self {
        let mut symbols: Vec<String> = Vec::new();
        for ch in list.chars().filter(|c| !c.is_whitespace()) {
            let symbol = ch.to_string();
            if !symbols.contains(&symbol) {
                symbols.push(symbol);
            }
        }
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.symbols.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Returns true if `symbol` is one of the registers.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    /// Index of `symbol` within the list.
    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }

    /// Returns true if the mark's symbol belongs to this list.
    pub fn admits(&self, mark: &Mark) -> bool {
        self.contains(&mark.symbol)
    }

    /// Sort key placing a mark by its register index; unknown symbols last.
    pub fn rank(&self, mark: &Mark) -> usize {
        self.position(&mark.symbol).unwrap_or(usize::MAX)
    }

    /// Sorts marks by their register index. Stable.
    pub fn sort_by_list(&self, marks: &mut [Mark]) {
        marks.sort_by_key(|m| self.rank(m));
    }
}

/// Sorts marks alphabetically by symbol, approximating a locale-aware
/// comparison.
pub fn sort_alphabetically(marks: &mut [Mark]) {
    marks.sort_by(|a, b| locale_cmp(&a.symbol, &b.symbol));
}

/// Case-insensitive comparison first, then lowercase before uppercase for
/// symbols that only differ in case, then raw code points.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| {
            let a_upper = a.chars().any(char::is_uppercase);
            let b_upper = b.chars().any(char::is_uppercase);
            a_upper.cmp(&b_upper)
        })
        .then_with(|| a.cmp(b))
}
