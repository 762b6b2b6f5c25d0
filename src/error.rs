//! Error types for mark operations.
//!
//! None of these abort the program. The input handler turns every variant
//! into a notice shown to the user and keeps running.

use std::fmt;

/// Recoverable failures surfaced by the session facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkError {
    /// Set or harpoon-add attempted with no document to bind.
    NoActiveDocument,
    /// Every harpoon register already carries a mark.
    RegistersExhausted,
    /// Undo requested with nothing to restore.
    NoLastChangedMark,
    /// No mark is bound to the symbol.
    MarkNotFound(String),
    /// The marked file is neither open nor present on disk.
    FileNotFound(String),
    /// Persisted data was written by a different schema version.
    SchemaMismatch { found: Option<u64>, expected: u64 },
}

impl MarkError {
    /// Returns true for conditions that only inform the user, as opposed to
    /// ones that should be shown as warnings.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            MarkError::RegistersExhausted | MarkError::NoLastChangedMark | MarkError::MarkNotFound(_)
        )
    }
}

impl fmt::Display for MarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkError::NoActiveDocument => write!(f, "No active file to mark."),
            MarkError::RegistersExhausted => {
                write!(f, "Harpoon registers are full, cannot add more marks.")
            }
            MarkError::NoLastChangedMark => write!(f, "No last changed mark to restore."),
            MarkError::MarkNotFound(symbol) => write!(f, "No mark set for '{}'", symbol),
            MarkError::FileNotFound(path) => write!(
                f,
                "File not found for path {}. The file may have been deleted, moved or renamed.",
                path
            ),
            MarkError::SchemaMismatch { found, expected } => match found {
                Some(found) => write!(
                    f,
                    "Saved marks use schema version {} but {} is expected. Some marks may not load correctly.",
                    found, expected
                ),
                None => write!(
                    f,
                    "Saved marks have no schema version ({} is expected). Some marks may not load correctly.",
                    expected
                ),
            },
        }
    }
}

impl std::error::Error for MarkError {}
