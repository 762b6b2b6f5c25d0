//! Keybind parsing and mapping of terminal keys to picker events.

use crate::config::Config;
use crate::editor::registers::RegisterList;
use std::fmt;
use termion::event::{Event, Key};

/// High-level picker events abstracted from raw keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// Move the highlight up
    MoveUp,
    /// Move the highlight down
    MoveDown,
    /// Act on the highlighted mark
    Select,
    /// Close without changes
    Cancel,
    /// Delete the highlighted mark
    Delete,
    /// Restore the last changed mark
    Undo,
    /// A register symbol was typed
    Register(String),
    /// Unknown or unmapped key
    Unknown,
}

/// Errors from parsing a keybind string such as `ctrl+k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeybindError {
    Empty,
    UnsupportedModifier(String),
    UnknownKey(String),
}

impl fmt::Display for KeybindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeybindError::Empty => write!(f, "Empty keybind"),
            KeybindError::UnsupportedModifier(m) => {
                write!(f, "Modifier '{}' is not supported in a terminal", m)
            }
            KeybindError::UnknownKey(k) => write!(f, "Unknown key '{}'", k),
        }
    }
}

impl std::error::Error for KeybindError {}

/// Parses a keybind like `ctrl+k`, `alt+x`, `shift+a`, `enter`, `esc`,
/// `up` or a single character.
///
/// Ctrl combinations the terminal reports as other keys are normalised:
/// `ctrl+j`/`ctrl+m` are Enter, `ctrl+i` is Tab and `ctrl+[` is Escape.
///
/// # Example
///
/// ```
/// use termion::event::Key;
/// use tethermarks::input::keys::parse_keybind;
///
/// assert_eq!(parse_keybind("ctrl+k"), Ok(Key::Ctrl('k')));
/// assert_eq!(parse_keybind("Enter"), Ok(Key::Char('\n')));
/// assert!(parse_keybind("cmd+k").is_err());
/// ```
pub fn parse_keybind(keybind: &str) -> Result<Key, KeybindError> {
    let parts: Vec<&str> = keybind.split('+').map(str::trim).collect();
    let (key_part, modifiers) = match parts.split_last() {
        Some((key, mods)) if !key.is_empty() => (*key, mods),
        // "ctrl++" style: the key itself is '+'
        Some((_, mods)) if keybind.trim().ends_with("++") => ("+", &mods[..mods.len() - 1]),
        _ => return Err(KeybindError::Empty),
    };

    let mut ctrl = false;
    let mut alt = false;
    let mut shift = false;
    for modifier in modifiers {
        match modifier.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => ctrl = true,
            "alt" | "option" => alt = true,
            "shift" => shift = true,
            other => return Err(KeybindError::UnsupportedModifier(other.to_string())),
        }
    }

    let named = match key_part.to_ascii_lowercase().as_str() {
        "enter" | "return" => Some(Key::Char('\n')),
        "esc" | "escape" => Some(Key::Esc),
        "tab" => Some(Key::Char('\t')),
        "space" => Some(Key::Char(' ')),
        "backspace" => Some(Key::Backspace),
        "delete" | "del" => Some(Key::Delete),
        "up" | "arrowup" => Some(Key::Up),
        "down" | "arrowdown" => Some(Key::Down),
        "left" | "arrowleft" => Some(Key::Left),
        "right" | "arrowright" => Some(Key::Right),
        "home" => Some(Key::Home),
        "end" => Some(Key::End),
        "pageup" => Some(Key::PageUp),
        "pagedown" => Some(Key::PageDown),
        _ => None,
    };

    if let Some(key) = named {
        if ctrl || alt || shift {
            return Err(KeybindError::UnsupportedModifier(
                modifiers.join("+").to_ascii_lowercase(),
            ));
        }
        return Ok(key);
    }

    let mut chars = key_part.chars();
    let ch = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(KeybindError::UnknownKey(key_part.to_string())),
    };

    match (ctrl, alt, shift) {
        (false, false, false) => Ok(Key::Char(ch)),
        (false, false, true) => Ok(Key::Char(ch.to_ascii_uppercase())),
        (true, false, false) => Ok(normalize_ctrl(ch.to_ascii_lowercase())),
        (false, true, false) => Ok(Key::Alt(ch)),
        (false, true, true) => Ok(Key::Alt(ch.to_ascii_uppercase())),
        _ => Err(KeybindError::UnsupportedModifier(
            modifiers.join("+").to_ascii_lowercase(),
        )),
    }
}

fn normalize_ctrl(ch: char) -> Key {
    match ch {
        'j' | 'm' => Key::Char('\n'),
        'i' => Key::Char('\t'),
        '[' => Key::Esc,
        c => Key::Ctrl(c),
    }
}

/// Formats a key for the instructions footer, e.g. `Ctrl+k`.
pub fn format_key(key: &Key) -> String {
    match key {
        Key::Char('\n') => "Enter".to_string(),
        Key::Char('\t') => "Tab".to_string(),
        Key::Char(' ') => "Space".to_string(),
        Key::Char(c) => c.to_string(),
        Key::Ctrl(c) => format!("Ctrl+{}", c),
        Key::Alt(c) => format!("Alt+{}", c),
        Key::Esc => "Esc".to_string(),
        Key::Up => "↑".to_string(),
        Key::Down => "↓".to_string(),
        Key::Left => "←".to_string(),
        Key::Right => "→".to_string(),
        Key::Backspace => "Backspace".to_string(),
        Key::Delete => "Del".to_string(),
        Key::Home => "Home".to_string(),
        Key::End => "End".to_string(),
        Key::PageUp => "PgUp".to_string(),
        Key::PageDown => "PgDn".to_string(),
        other => format!("{:?}", other),
    }
}

/// Per-action key bindings for the mark list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinds {
    pub up: Vec<Key>,
    pub down: Vec<Key>,
    pub select: Vec<Key>,
    pub cancel: Vec<Key>,
    pub delete: Vec<Key>,
    pub undo: Vec<Key>,
}

impl Default for Keybinds {
    /// Built-in bindings. Ctrl+j is not offered for "down" because
    /// terminals report it as Enter.
    fn default() -> Self {
        Self {
            up: vec![Key::Up, Key::Ctrl('k'), Key::Ctrl('p')],
            down: vec![Key::Down, Key::Ctrl('n')],
            select: vec![Key::Char('\n')],
            cancel: vec![Key::Esc, Key::Ctrl('c')],
            delete: vec![Key::Ctrl('d')],
            undo: vec![Key::Ctrl('u')],
        }
    }
}

impl Keybinds {
    /// Built-in bindings with any non-empty override from the config
    /// replacing the matching action. Unparseable overrides are logged and
    /// ignored.
    pub fn from_config(config: &Config) -> Self {
        let mut keybinds = Self::default();
        override_binding(&mut keybinds.up, &config.list_up, "list_up");
        override_binding(&mut keybinds.down, &config.list_down, "list_down");
        override_binding(&mut keybinds.select, &config.list_select, "list_select");
        override_binding(&mut keybinds.cancel, &config.list_cancel, "list_cancel");
        override_binding(&mut keybinds.delete, &config.list_delete, "list_delete");
        override_binding(&mut keybinds.undo, &config.list_undo, "list_undo");
        keybinds
    }
}

fn override_binding(slot: &mut Vec<Key>, configured: &str, name: &str) {
    if configured.trim().is_empty() {
        return;
    }
    match parse_keybind(configured) {
        Ok(key) => *slot = vec![key],
        Err(e) => log::warn!("Ignoring {} = {:?}: {}", name, configured, e),
    }
}

/// Maps a termion Event to a PickerEvent.
///
/// Keybinds are checked before register symbols, so a register that
/// collides with a keybind is unreachable by keystroke.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use tethermarks::editor::registers::RegisterList;
/// use tethermarks::input::keys::{map_key_event, Keybinds, PickerEvent};
///
/// let keybinds = Keybinds::default();
/// let registers = RegisterList::parse("hjkl");
/// assert_eq!(
///     map_key_event(Event::Key(Key::Char('j')), &keybinds, &registers),
///     PickerEvent::Register("j".to_string())
/// );
/// assert_eq!(
///     map_key_event(Event::Key(Key::Ctrl('k')), &keybinds, &registers),
///     PickerEvent::MoveUp
/// );
/// ```
pub fn map_key_event(event: Event, keybinds: &Keybinds, registers: &RegisterList) -> PickerEvent {
    // We only care about key events
    let key = match event {
        Event::Key(k) => k,
        _ => return PickerEvent::Unknown,
    };

    if keybinds.up.contains(&key) {
        PickerEvent::MoveUp
    } else if keybinds.down.contains(&key) {
        PickerEvent::MoveDown
    } else if keybinds.delete.contains(&key) {
        PickerEvent::Delete
    } else if keybinds.select.contains(&key) {
        PickerEvent::Select
    } else if keybinds.undo.contains(&key) {
        PickerEvent::Undo
    } else if keybinds.cancel.contains(&key) {
        PickerEvent::Cancel
    } else {
        match key {
            Key::Char(c) if registers.contains(&c.to_string()) => {
                PickerEvent::Register(c.to_string())
            }
            _ => PickerEvent::Unknown,
        }
    }
}
