//! Keybind instructions shown under the mark list.

use crate::input::keys::{format_key, Keybinds};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use termion::event::Key;

/// Builds the `(keys, purpose)` pairs for the footer.
pub fn instruction_entries(keybinds: &Keybinds) -> Vec<(String, &'static str)> {
    vec![
        (format_keys(&keybinds.up), "Up"),
        (format_keys(&keybinds.down), "Down"),
        (format_keys(&keybinds.delete), "Delete"),
        (format_keys(&keybinds.undo), "Undo last changed mark"),
        ("Symbol".to_string(), "Jump/Set/Delete"),
        (format_keys(&keybinds.select), "Confirm"),
        (format_keys(&keybinds.cancel), "Close"),
    ]
}

fn format_keys(keys: &[Key]) -> String {
    keys.iter().map(format_key).collect::<Vec<_>>().join("/")
}

pub fn render_instructions(f: &mut Frame, area: Rect, keybinds: &Keybinds, colors: &ThemeColors) {
    let key_style = Style::default()
        .fg(colors.info)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default()
        .fg(colors.muted)
        .add_modifier(Modifier::ITALIC);

    let mut spans = Vec::new();
    for (keys, purpose) in instruction_entries(keybinds) {
        spans.push(Span::styled(keys, key_style));
        spans.push(Span::styled(format!(": {}  ", purpose), text_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
