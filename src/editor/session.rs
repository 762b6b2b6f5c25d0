//! Session facade over the mark store.
//!
//! [`Session`] owns the live mark collection, the last-changed mark and the
//! settings. Every mutation goes through the pure functions in
//! [`super::marks`] and replaces the collection wholesale. The session then
//! flags itself dirty so the caller knows to persist it.
//!
//! # Example
//!
//! ```
//! use tethermarks::config::Config;
//! use tethermarks::editor::session::Session;
//! use tethermarks::host::SessionWorkspace;
//!
//! let mut session = Session::new(Config::default(), Vec::new(), None);
//! let workspace = SessionWorkspace::new(".").with_active("notes/todo.md");
//!
//! session.set_mark("a", &workspace).unwrap();
//! assert_eq!(session.mark("a").unwrap().file_path, "notes/todo.md");
//! assert!(session.is_dirty());
//! ```

use super::marks::{self, Mark};
use super::mode::MarkScope;
use super::view::resolve_visible_marks;
use crate::config::Config;
use crate::error::MarkError;
use crate::file::{PersistedState, SCHEMA_VERSION};
use crate::host::{HostAction, OpenFileLocator, OpenTarget, Workspace};
use std::path::Path;

/// Represents a message to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Live mark state for one invocation.
#[derive(Debug, Clone)]
pub struct Session {
    marks: Vec<Mark>,
    last_changed: Option<Mark>,
    config: Config,
    message: Option<Message>,
    dirty: bool,
}

impl Session {
    pub fn new(config: Config, marks: Vec<Mark>, last_changed: Option<Mark>) -> Self {
        Self {
            marks,
            last_changed,
            config,
            message: None,
            dirty: false,
        }
    }

    /// Builds a session from a persisted blob. `config` wins over the
    /// settings stored in the blob when given.
    pub fn from_state(state: PersistedState, config: Option<Config>) -> Self {
        let config = config.unwrap_or(state.settings);
        Self::new(config, state.marks, state.last_changed_mark)
    }

    /// Snapshot for persistence.
    pub fn to_state(&self) -> PersistedState {
        PersistedState {
            schema_version: SCHEMA_VERSION,
            settings: self.config.clone(),
            marks: self.marks.clone(),
            last_changed_mark: self.last_changed.clone(),
        }
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn mark(&self, symbol: &str) -> Option<&Mark> {
        marks::find_mark_by_symbol(&self.marks, symbol)
    }

    pub fn last_changed_mark(&self) -> Option<&Mark> {
        self.last_changed.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns true if marks changed since the last save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Shows an error as a notice. Informational conditions are not warnings.
    pub fn report(&mut self, error: &MarkError) {
        let level = if error.is_informational() {
            MessageLevel::Info
        } else {
            MessageLevel::Warning
        };
        self.set_message(error.to_string(), level);
    }

    /// The marks the picker shows for `scope`, freshly computed.
    pub fn visible_marks(&self, scope: MarkScope) -> Vec<Mark> {
        resolve_visible_marks(&self.marks, scope, &self.config).collect()
    }

    fn replace_marks(&mut self, marks: Vec<Mark>) {
        self.marks = marks;
        self.dirty = true;
    }

    fn remember(&mut self, changed: Option<Mark>) {
        if changed.is_some() {
            self.last_changed = changed;
            self.dirty = true;
        }
    }

    /// Binds `symbol` to the active document, overwriting any existing
    /// binding. The overwritten binding becomes the last-changed mark.
    pub fn set_mark(&mut self, symbol: &str, workspace: &dyn Workspace) -> Result<(), MarkError> {
        let path = workspace.active_file().ok_or(MarkError::NoActiveDocument)?;
        let out = marks::set_or_overwrite_mark(&self.marks, symbol, &path);
        log::debug!("set mark '{}' -> {}", symbol, path);
        self.replace_marks(out.marks);
        self.remember(out.overwritten);
        self.set_message(
            format!("Set mark '{}' to {}", symbol, display_name(&path)),
            MessageLevel::Info,
        );
        Ok(())
    }

    /// Jumps to the document bound to `symbol`: focuses it if already open,
    /// otherwise opens it per `open_mark_in_new_tab`.
    pub fn goto_mark(
        &mut self,
        symbol: &str,
        workspace: &mut dyn Workspace,
        locator: &dyn OpenFileLocator,
    ) -> Result<HostAction, MarkError> {
        let path = self
            .mark(symbol)
            .map(|m| m.file_path.clone())
            .ok_or_else(|| MarkError::MarkNotFound(symbol.to_string()))?;

        if let Some(leaf) = locator.locate(workspace, &path) {
            if workspace.focus(leaf) {
                return Ok(HostAction::Focus { leaf, path });
            }
        }

        if !workspace.file_exists(&path) {
            return Err(MarkError::FileNotFound(path));
        }

        let target = OpenTarget::from_config(&self.config);
        workspace.open(&path, target).map_err(|e| {
            log::warn!("Opening {} failed: {:#}", path, e);
            MarkError::FileNotFound(path.clone())
        })?;
        Ok(HostAction::Open { path, target })
    }

    /// Removes the mark bound to `symbol`. It becomes the last-changed mark.
    ///
    /// With gap removal enabled, deleting a Harpoon register shifts the
    /// remaining Harpoon marks left.
    pub fn delete_mark(&mut self, symbol: &str) -> Result<Mark, MarkError> {
        let out = marks::delete_mark(&self.marks, symbol);
        let deleted = out
            .deleted
            .ok_or_else(|| MarkError::MarkNotFound(symbol.to_string()))?;
        log::debug!("deleted mark '{}' ({})", symbol, deleted.file_path);
        self.replace_marks(out.marks);
        self.remember(Some(deleted.clone()));

        let harpoon = self.config.registers(MarkScope::Harpoon);
        if self.config.harpoon_register_gap_removal && harpoon.contains(symbol) {
            self.compact_harpoon_gaps();
        }

        self.set_message(format!("Deleted mark '{}'", symbol), MessageLevel::Info);
        Ok(deleted)
    }

    /// Puts the last-changed mark back. Whatever it displaces becomes the
    /// next last-changed mark, so undoing twice swaps back.
    pub fn restore_last_changed(&mut self) -> Result<(), MarkError> {
        let last = self.last_changed.take().ok_or(MarkError::NoLastChangedMark)?;
        let out = marks::restore_last_changed(&self.marks, &last);
        log::debug!("restored mark '{}' -> {}", last.symbol, last.file_path);
        self.replace_marks(out.marks);
        self.last_changed = out.displaced;
        self.set_message(
            format!("Restored mark '{}' to {}", last.symbol, last.file_path),
            MessageLevel::Info,
        );
        Ok(())
    }

    /// Binds the active document to the first free Harpoon register.
    /// Returns the register used.
    pub fn add_file_to_harpoon(&mut self, workspace: &dyn Workspace) -> Result<String, MarkError> {
        let registers = self.config.registers(MarkScope::Harpoon);
        let register = marks::find_first_unused_register(&self.marks, &registers)
            .ok_or(MarkError::RegistersExhausted)?
            .to_string();
        self.set_mark(&register, workspace)?;
        Ok(register)
    }

    /// Shifts Harpoon marks left over any unbound registers.
    pub fn compact_harpoon_gaps(&mut self) {
        let registers = self.config.registers(MarkScope::Harpoon);
        let compacted = marks::compact_harpoon_gaps(&self.marks, &registers);
        if compacted != self.marks {
            self.replace_marks(compacted);
        }
    }
}

fn display_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SessionWorkspace;

    #[test]
    fn test_set_without_active_document() {
        let mut session = Session::new(Config::default(), Vec::new(), None);
        let workspace = SessionWorkspace::new(".");
        assert_eq!(
            session.set_mark("a", &workspace),
            Err(MarkError::NoActiveDocument)
        );
        assert!(session.marks().is_empty());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_set_message_uses_file_name() {
        let mut session = Session::new(Config::default(), Vec::new(), None);
        let workspace = SessionWorkspace::new(".").with_active("deep/dir/note.md");
        session.set_mark("q", &workspace).unwrap();
        assert_eq!(
            session.message().map(|m| m.text.as_str()),
            Some("Set mark 'q' to note.md")
        );
    }

    #[test]
    fn test_report_levels() {
        let mut session = Session::new(Config::default(), Vec::new(), None);
        session.report(&MarkError::RegistersExhausted);
        assert_eq!(session.message().unwrap().level, MessageLevel::Info);
        session.report(&MarkError::NoActiveDocument);
        assert_eq!(session.message().unwrap().level, MessageLevel::Warning);
    }
}
