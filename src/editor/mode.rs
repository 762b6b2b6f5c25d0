//! Picker modes.
//!
//! The mark list opens in exactly one [`PickerMode`] and resolves with a
//! single action. [`MarkScope`] is orthogonal to the mode and selects which
//! register list applies.
//!
//! # Example
//!
//! ```
//! use tethermarks::editor::mode::{MarkScope, PickerMode};
//!
//! assert_eq!(PickerMode::default(), PickerMode::Goto);
//! assert_eq!(format!("{}", PickerMode::Set), "SET");
//! assert_eq!(PickerMode::Delete.placeholder(), "Select a mark to delete");
//! assert_eq!(MarkScope::default(), MarkScope::General);
//! ```

use std::fmt;

/// What a register keystroke does while the picker is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerMode {
    /// Bind the active document to the chosen register.
    Set,
    /// Jump to the document bound to the chosen register.
    #[default]
    Goto,
    /// Remove the chosen mark.
    Delete,
}

impl PickerMode {
    /// Title shown at the top of the mark list.
    pub fn placeholder(&self) -> &'static str {
        match self {
            PickerMode::Set => "Select a mark to set",
            PickerMode::Goto => "Select a mark to go to",
            PickerMode::Delete => "Select a mark to delete",
        }
    }
}

impl fmt::Display for PickerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerMode::Set => write!(f, "SET"),
            PickerMode::Goto => write!(f, "GOTO"),
            PickerMode::Delete => write!(f, "DELETE"),
        }
    }
}

/// Which register namespace a picker works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkScope {
    #[default]
    General,
    Harpoon,
}

impl fmt::Display for MarkScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkScope::General => write!(f, "MARKS"),
            MarkScope::Harpoon => write!(f, "HARPOON"),
        }
    }
}
