//! Mark list state for one picker invocation.

use super::marks::Mark;
use super::mode::{MarkScope, PickerMode};
use super::session::Session;

/// Selection and lifecycle of the modal mark list.
///
/// The list itself is recomputed from the session after every mutation via
/// [`Picker::refresh`]; the picker only remembers which row is highlighted.
#[derive(Debug, Clone)]
pub struct Picker {
    mode: PickerMode,
    scope: MarkScope,
    items: Vec<Mark>,
    selected: usize,
    closed: bool,
}

impl Picker {
    pub fn new(mode: PickerMode, scope: MarkScope, session: &Session) -> Self {
        Self {
            mode,
            scope,
            items: session.visible_marks(scope),
            selected: 0,
            closed: false,
        }
    }

    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    pub fn scope(&self) -> MarkScope {
        self.scope
    }

    pub fn items(&self) -> &[Mark] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Mark> {
        self.items.get(self.selected)
    }

    /// Moves the highlight by `delta`, wrapping at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.items.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let len = len as isize;
        let next = (self.selected as isize + delta).rem_euclid(len);
        self.selected = next as usize;
    }

    /// Reloads the list from the session, keeping the highlighted index
    /// clamped to the new length.
    pub fn refresh(&mut self, session: &Session) {
        self.items = session.visible_marks(self.scope);
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn session() -> Session {
        let config = Config {
            register_list: "abc".to_string(),
            ..Config::default()
        };
        Session::new(
            config,
            vec![
                Mark::new("a", "a.md"),
                Mark::new("b", "b.md"),
                Mark::new("c", "c.md"),
            ],
            None,
        )
    }

    #[test]
    fn test_selection_wraps() {
        let session = session();
        let mut picker = Picker::new(PickerMode::Goto, MarkScope::General, &session);
        picker.move_selection(-1);
        assert_eq!(picker.selected_index(), 2);
        picker.move_selection(1);
        assert_eq!(picker.selected_index(), 0);
    }

    #[test]
    fn test_refresh_clamps_selection() {
        let mut session = session();
        let mut picker = Picker::new(PickerMode::Delete, MarkScope::General, &session);
        picker.move_selection(2);
        session.delete_mark("c").unwrap();
        picker.refresh(&session);
        assert_eq!(picker.selected_index(), 1);
        assert_eq!(picker.selected().map(|m| m.symbol.as_str()), Some("b"));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let session = Session::new(Config::default(), Vec::new(), None);
        let mut picker = Picker::new(PickerMode::Goto, MarkScope::Harpoon, &session);
        picker.move_selection(1);
        assert!(picker.selected().is_none());
    }
}
