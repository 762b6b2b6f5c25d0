//! Theme system for tethermarks.
//!
//! # Built-in Themes
//!
//! - `"default-dark"`: ANSI colors, follows the terminal palette
//! - `"default-light"`: A light theme for well-lit environments
//! - `"gruvbox-dark"`: Retro groove color scheme
//! - `"nord"`: Arctic, north-bluish palette
//! - `"dracula"`: Dark theme with vibrant purples and pinks
//!
//! # Examples
//!
//! ```
//! use tethermarks::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("nord").unwrap();
//! assert_eq!(theme.name, "nord");
//! assert!(get_builtin_theme("nonexistent").is_none());
//! ```

pub mod colors;

use colors::ThemeColors;

/// A color theme for the mark list.
#[derive(Debug, Clone)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

/// Returns a built-in theme by name, or `None` if the name is unknown.
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    let colors = match name {
        "default-dark" => ThemeColors::default_dark(),
        "default-light" => ThemeColors::default_light(),
        "gruvbox-dark" => ThemeColors::gruvbox_dark(),
        "nord" => ThemeColors::nord(),
        "dracula" => ThemeColors::dracula(),
        _ => return None,
    };
    Some(Theme {
        name: name.to_string(),
        colors,
    })
}

/// Returns a sorted list of all available built-in theme names.
pub fn list_builtin_themes() -> Vec<String> {
    let mut themes = vec![
        "default-dark".to_string(),
        "default-light".to_string(),
        "dracula".to_string(),
        "gruvbox-dark".to_string(),
        "nord".to_string(),
    ];
    themes.sort();
    themes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_theme_resolves() {
        for name in list_builtin_themes() {
            assert!(get_builtin_theme(&name).is_some(), "missing {}", name);
        }
    }
}
