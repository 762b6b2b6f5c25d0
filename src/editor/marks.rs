//! Mark store operations.
//!
//! A mark binds a single-keystroke symbol to a file path. Every function in
//! this module takes the current collection by reference and returns a new
//! one; nothing is mutated in place. Callers own persistence of the result.
//!
//! The collection never holds two marks with the same symbol.

use super::registers::RegisterList;
use serde::{Deserialize, Serialize};

/// A binding from a register symbol to a file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mark {
    pub symbol: String,
    pub file_path: String,
}

impl Mark {
    pub fn new(symbol: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            file_path: file_path.into(),
        }
    }
}

/// Result of [`set_or_overwrite_mark`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOutcome {
    pub marks: Vec<Mark>,
    /// The binding that previously occupied the symbol.
    pub overwritten: Option<Mark>,
}

/// Result of [`delete_mark`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub marks: Vec<Mark>,
    pub deleted: Option<Mark>,
}

/// Result of [`restore_last_changed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreOutcome {
    pub marks: Vec<Mark>,
    /// The occupant pushed out by the restored mark. It becomes the next
    /// last-changed mark so a second undo swaps back.
    pub displaced: Option<Mark>,
}

/// Returns the mark bound to `symbol`.
pub fn find_mark_by_symbol<'a>(marks: &'a [Mark], symbol: &str) -> Option<&'a Mark> {
    marks.iter().find(|m| m.symbol == symbol)
}

/// Binds `symbol` to `file_path`, replacing any existing binding.
pub fn set_or_overwrite_mark(marks: &[Mark], symbol: &str, file_path: &str) -> SetOutcome {
    let DeleteOutcome {
        mut marks,
        deleted: overwritten,
    } = delete_mark(marks, symbol);
    marks.push(Mark::new(symbol, file_path));
    SetOutcome { marks, overwritten }
}

/// Removes the mark bound to `symbol`. Deleting an unbound symbol returns
/// the collection unchanged.
pub fn delete_mark(marks: &[Mark], symbol: &str) -> DeleteOutcome {
    let deleted = find_mark_by_symbol(marks, symbol).cloned();
    let marks = marks
        .iter()
        .filter(|m| m.symbol != symbol)
        .cloned()
        .collect();
    DeleteOutcome { marks, deleted }
}

/// Puts `last_changed` back, unconditionally replacing the current occupant
/// of its symbol.
pub fn restore_last_changed(marks: &[Mark], last_changed: &Mark) -> RestoreOutcome {
    let SetOutcome { marks, overwritten } =
        set_or_overwrite_mark(marks, &last_changed.symbol, &last_changed.file_path);
    RestoreOutcome {
        marks,
        displaced: overwritten,
    }
}

/// Returns the first register, left to right, that carries no mark.
pub fn find_first_unused_register<'a>(
    marks: &[Mark],
    registers: &'a RegisterList,
) -> Option<&'a str> {
    registers
        .iter()
        .find(|reg| find_mark_by_symbol(marks, reg).is_none())
}

/// Shifts harpoon marks left so that N bound registers occupy exactly the
/// first N registers of the list, keeping their relative order. Marks on
/// symbols outside `registers` are left alone.
pub fn compact_harpoon_gaps(marks: &[Mark], registers: &RegisterList) -> Vec<Mark> {
    let mut marks = marks.to_vec();
    let mut write = 0;

    for read in registers.iter() {
        let Some(path) = find_mark_by_symbol(&marks, read).map(|m| m.file_path.clone()) else {
            continue;
        };
        if let Some(target) = registers.get(write) {
            marks = set_or_overwrite_mark(&marks, target, &path).marks;
        }
        write += 1;
    }

    // Everything from the write cursor on is a leftover copy.
    for stale in registers.iter().skip(write) {
        marks.retain(|m| m.symbol != stale);
    }

    marks
}
