//! Mark list rendering.

use crate::editor::picker::Picker;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the marks of the picker, one per row, with the highlighted row
/// marked by `>` and a selection background.
///
/// The list scrolls so the highlighted row is always visible.
pub fn render_mark_list(f: &mut Frame, area: Rect, picker: &Picker, colors: &ThemeColors) {
    let items = picker.items();

    if items.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No marks",
            Style::default()
                .fg(colors.muted)
                .add_modifier(Modifier::ITALIC),
        )));
        f.render_widget(hint, area);
        return;
    }

    let height = area.height.max(1) as usize;
    let offset = scroll_offset(picker.selected_index(), height);

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(idx, mark)| {
            let is_selected = idx == picker.selected_index();
            let cursor = if is_selected { "> " } else { "  " };
            let row = if is_selected {
                Style::default()
                    .bg(colors.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(cursor, row.fg(colors.foreground)),
                Span::styled(format!("{}  ", mark.symbol), row.fg(colors.symbol)),
                Span::styled(mark.file_path.clone(), row.fg(colors.path)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

/// First visible row so that `selected` fits in a viewport of `height`.
fn scroll_offset(selected: usize, height: usize) -> usize {
    (selected + 1).saturating_sub(height)
}
