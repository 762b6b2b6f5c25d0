//! Color definitions for tethermarks themes.

use ratatui::style::Color;

/// Defines all colors used by the mark list.
///
/// # Examples
///
/// ```
/// use tethermarks::theme::colors::ThemeColors;
/// use ratatui::style::Color;
///
/// let dark = ThemeColors::default_dark();
/// assert_eq!(dark.background, Color::Reset);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Color for register symbols.
    pub symbol: Color,
    /// Color for marked file paths.
    pub path: Color,

    /// Main background color.
    pub background: Color,
    /// Main foreground/text color.
    pub foreground: Color,
    /// Border and title of the mark list.
    pub border: Color,
    /// Background of the highlighted row.
    pub selection_bg: Color,
    /// Dimmed text such as the instructions footer and empty-list hint.
    pub muted: Color,

    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// ANSI colors adapt to the user's terminal palette.
    pub fn default_dark() -> Self {
        Self {
            symbol: Color::LightBlue,
            path: Color::Green,

            background: Color::Reset, // Use terminal's default background
            foreground: Color::Gray,
            border: Color::LightBlue,
            selection_bg: Color::DarkGray,
            muted: Color::DarkGray,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    pub fn default_light() -> Self {
        Self {
            symbol: Color::Rgb(166, 38, 164),
            path: Color::Rgb(80, 161, 79),

            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            border: Color::Rgb(82, 139, 255),
            selection_bg: Color::Rgb(220, 220, 220),
            muted: Color::Rgb(160, 161, 167),

            error: Color::Rgb(202, 18, 67),
            warning: Color::Rgb(152, 104, 1),
            info: Color::Rgb(1, 132, 188),
        }
    }

    /// Returns the Gruvbox dark color scheme.
    pub fn gruvbox_dark() -> Self {
        Self {
            symbol: Color::Rgb(251, 184, 108), // orange
            path: Color::Rgb(184, 187, 38),    // green

            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            border: Color::Rgb(131, 165, 152), // aqua
            selection_bg: Color::Rgb(60, 56, 54),
            muted: Color::Rgb(146, 131, 116),

            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(250, 189, 47),
            info: Color::Rgb(131, 165, 152),
        }
    }

    /// Returns the Nord color scheme.
    pub fn nord() -> Self {
        Self {
            symbol: Color::Rgb(136, 192, 208), // frost cyan
            path: Color::Rgb(163, 190, 140),   // aurora green

            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            border: Color::Rgb(136, 192, 208),
            selection_bg: Color::Rgb(59, 66, 82),
            muted: Color::Rgb(76, 86, 106),

            error: Color::Rgb(191, 97, 106),
            warning: Color::Rgb(235, 203, 139),
            info: Color::Rgb(136, 192, 208),
        }
    }

    /// Returns the Dracula color scheme.
    pub fn dracula() -> Self {
        Self {
            symbol: Color::Rgb(189, 147, 249), // purple
            path: Color::Rgb(241, 250, 140),   // yellow

            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            border: Color::Rgb(139, 233, 253),
            selection_bg: Color::Rgb(68, 71, 90),
            muted: Color::Rgb(98, 114, 164),

            error: Color::Rgb(255, 85, 85),
            warning: Color::Rgb(255, 184, 108),
            info: Color::Rgb(139, 233, 253),
        }
    }
}
