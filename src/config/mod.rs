//! Configuration system for tethermarks.
//!
//! This module provides the settings consumed by the mark engine with sensible
//! defaults and support for serialization/deserialization via serde. Every
//! field is mandatory in the struct; missing keys in a TOML or JSON source are
//! filled in once, while deserializing, from the `default_*` functions below.
//!
//! # Example
//!
//! ```
//! use tethermarks::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert_eq!(config.harpoon_register_list, "hjkl");
//!
//! // Create custom configuration
//! let custom = Config {
//!     harpoon_register_list: "asdf".to_string(),
//!     harpoon_register_gap_removal: false,
//!     ..Config::default()
//! };
//! assert!(!custom.harpoon_register_gap_removal);
//! ```

use crate::editor::mode::MarkScope;
use crate::editor::registers::RegisterList;
use serde::{Deserialize, Serialize};

/// Settings for tethermarks.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `open_mark_in_new_tab` - Open unopened marks in a new tab instead of the current one (default: true)
/// * `experimental_goto` - Find open files by scanning the whole layout, including tabs restored from a previous session (default: false)
/// * `register_list` - Symbols usable as general registers (default: a-z, A-Z, 0-9)
/// * `register_sort_by_list` - Order general marks by `register_list` instead of alphabetically (default: false)
/// * `harpoon_register_list` - Symbols usable as Harpoon registers (default: "hjkl")
/// * `harpoon_register_sort_by_list` - Order Harpoon marks by `harpoon_register_list` (default: true)
/// * `harpoon_register_gap_removal` - Shift Harpoon marks left after a deletion (default: true)
/// * `list_up`, `list_down`, `list_select`, `list_cancel`, `list_delete`, `list_undo` -
///   Keybind overrides for the mark list; empty keeps the built-in bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Open a mark in a new tab when its file is not already open
    #[serde(default = "default_open_mark_in_new_tab")]
    pub open_mark_in_new_tab: bool,

    /// Scan every leaf in the layout when looking for an open file
    #[serde(default)]
    pub experimental_goto: bool,

    /// Symbols usable as general registers
    #[serde(default = "default_register_list")]
    pub register_list: String,

    /// Sort general marks by register list order
    #[serde(default)]
    pub register_sort_by_list: bool,

    /// Symbols usable as Harpoon registers
    #[serde(default = "default_harpoon_register_list")]
    pub harpoon_register_list: String,

    /// Sort Harpoon marks by Harpoon register list order
    #[serde(default = "default_harpoon_register_sort_by_list")]
    pub harpoon_register_sort_by_list: bool,

    /// Remove gaps between Harpoon marks after a deletion
    #[serde(default = "default_harpoon_register_gap_removal")]
    pub harpoon_register_gap_removal: bool,

    /// Move selection up in the mark list
    #[serde(default)]
    pub list_up: String,

    /// Move selection down in the mark list
    #[serde(default)]
    pub list_down: String,

    /// Confirm the highlighted mark
    #[serde(default)]
    pub list_select: String,

    /// Close the mark list without changes
    #[serde(default)]
    pub list_cancel: String,

    /// Delete the highlighted mark
    #[serde(default)]
    pub list_delete: String,

    /// Restore the last changed mark
    #[serde(default)]
    pub list_undo: String,
}

/// Returns the default theme name.
fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_open_mark_in_new_tab() -> bool {
    true
}

/// Returns the default general register list.
fn default_register_list() -> String {
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".to_string()
}

/// Returns the default Harpoon register list.
fn default_harpoon_register_list() -> String {
    "hjkl".to_string()
}

fn default_harpoon_register_sort_by_list() -> bool {
    true
}

fn default_harpoon_register_gap_removal() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            open_mark_in_new_tab: default_open_mark_in_new_tab(),
            experimental_goto: false,
            register_list: default_register_list(),
            register_sort_by_list: false,
            harpoon_register_list: default_harpoon_register_list(),
            harpoon_register_sort_by_list: default_harpoon_register_sort_by_list(),
            harpoon_register_gap_removal: default_harpoon_register_gap_removal(),
            list_up: String::new(),
            list_down: String::new(),
            list_select: String::new(),
            list_cancel: String::new(),
            list_delete: String::new(),
            list_undo: String::new(),
        }
    }
}

impl Config {
    /// Returns the register list that applies to `scope`.
    pub fn registers(&self, scope: MarkScope) -> RegisterList {
        match scope {
            MarkScope::General => RegisterList::parse(&self.register_list),
            MarkScope::Harpoon => RegisterList::parse(&self.harpoon_register_list),
        }
    }

    /// Returns whether marks in `scope` are ordered by their register list.
    pub fn sort_by_list(&self, scope: MarkScope) -> bool {
        match scope {
            MarkScope::General => self.register_sort_by_list,
            MarkScope::Harpoon => self.harpoon_register_sort_by_list,
        }
    }

    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/tethermarks/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("tethermarks");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns `None` if the file doesn't exist. A file that can't be read or
    /// parsed yields the default configuration.
    pub fn load() -> Option<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }
        Some(Self::load_from(&config_path))
    }

    /// Loads configuration from a specific TOML file, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                log::warn!("Invalid config at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("Could not read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration as TOML to `path`.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_per_scope() {
        let config = Config {
            register_list: "abc".to_string(),
            harpoon_register_list: "xy".to_string(),
            ..Default::default()
        };
        assert_eq!(config.registers(MarkScope::General).len(), 3);
        assert_eq!(config.registers(MarkScope::Harpoon).len(), 2);
    }

    #[test]
    fn test_sort_flags_are_independent() {
        let config = Config {
            register_sort_by_list: true,
            harpoon_register_sort_by_list: false,
            ..Default::default()
        };
        assert!(config.sort_by_list(MarkScope::General));
        assert!(!config.sort_by_list(MarkScope::Harpoon));
    }
}
