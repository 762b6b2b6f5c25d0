//! Message area rendering for notices.

use crate::editor::session::{MessageLevel, Session};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the latest notice at the bottom of the mark list, or nothing.
pub fn render_message_area(f: &mut Frame, area: Rect, session: &Session, colors: &ThemeColors) {
    let content = if let Some(message) = session.message() {
        let color = match message.level {
            MessageLevel::Error => colors.error,
            MessageLevel::Warning => colors.warning,
            MessageLevel::Info => colors.info,
        };
        Line::from(vec![Span::styled(
            message.text.as_str(),
            Style::default().fg(color),
        )])
    } else {
        Line::from("")
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
