//! UI module for the tethermarks terminal interface.
//!
//! Renders the mark list as a centered modal made of three areas:
//! - Mark list (top): visible marks for the picker's scope
//! - Instructions (middle): active keybinds
//! - Message area (bottom): the latest notice

pub mod instructions;
pub mod mark_list;
pub mod message_area;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Terminal;

use crate::editor::picker::Picker;
use crate::editor::session::Session;
use crate::input::keys::Keybinds;
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// # Example
///
/// ```
/// use tethermarks::ui::UI;
/// use tethermarks::theme::get_builtin_theme;
///
/// let theme = get_builtin_theme("default-dark").unwrap();
/// let ui = UI::new(theme);
/// assert_eq!(ui.theme_name(), "default-dark");
/// ```
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Draws the modal mark list.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        picker: &Picker,
        session: &Session,
        keybinds: &Keybinds,
    ) -> Result<()> {
        let colors = &self.theme.colors;
        terminal.draw(|f| {
            let area = centered_rect(60, 70, f.area());
            f.render_widget(Clear, area);

            let title = format!(" {} [{}] ", picker.mode().placeholder(), picker.scope());
            let block = Block::default()
                .title(title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.background).fg(colors.foreground));
            let inner = block.inner(area);
            f.render_widget(block, area);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Mark list
                    Constraint::Length(2), // Instructions
                    Constraint::Length(1), // Message area
                ])
                .split(inner);

            mark_list::render_mark_list(f, chunks[0], picker, colors);
            instructions::render_instructions(f, chunks[1], keybinds, colors);
            message_area::render_message_area(f, chunks[2], session, colors);
        })?;

        Ok(())
    }
}

/// Creates a rectangle centered in `r` with the given percentage size.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::editor::marks::Mark;
    use crate::editor::mode::{MarkScope, PickerMode};
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_lists_marks_and_title() {
        let ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let session = Session::new(
            Config::default(),
            vec![Mark::new("a", "notes/alpha.md")],
            None,
        );
        let picker = Picker::new(PickerMode::Goto, MarkScope::General, &session);

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        ui.render(&mut terminal, &picker, &session, &Keybinds::default())
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Select a mark to go to"));
        assert!(text.contains("notes/alpha.md"));
    }

    #[test]
    fn test_render_empty_list() {
        let ui = UI::new(get_builtin_theme("nord").unwrap());
        let session = Session::new(Config::default(), Vec::new(), None);
        let picker = Picker::new(PickerMode::Set, MarkScope::Harpoon, &session);

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        ui.render(&mut terminal, &picker, &session, &Keybinds::default())
            .unwrap();

        assert!(buffer_text(&terminal).contains("No marks"));
    }
}
