//! State file loading.
//!
//! Loading never fails on content. A blob from another schema version, or
//! one with unreadable fields, is loaded field by field and anything that
//! cannot be read falls back to its default. The mismatch is reported so the
//! caller can warn the user.

use super::{PersistedState, SCHEMA_VERSION};
use crate::config::Config;
use crate::editor::marks::Mark;
use crate::error::MarkError;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A loaded state plus any schema problem found on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedState {
    pub state: PersistedState,
    pub schema_warning: Option<MarkError>,
}

/// Loads the state file at `path`.
///
/// A missing file yields an empty state at the current schema version.
///
/// # Errors
///
/// Returns an error only if the file exists but cannot be read.
///
/// # Examples
///
/// ```no_run
/// use tethermarks::file::loader::load_state_file;
///
/// let loaded = load_state_file("data.json").unwrap();
/// println!("{} marks", loaded.state.marks.len());
/// ```
pub fn load_state_file<P: AsRef<Path>>(path: P) -> Result<LoadedState> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(LoadedState {
            state: PersistedState::default(),
            schema_warning: None,
        });
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file {}", path.display()))?;
    Ok(parse_state(&content))
}

/// Parses a state blob, best effort.
pub fn parse_state(content: &str) -> LoadedState {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("State file is not valid JSON: {}", e);
            Value::Null
        }
    };

    let found = value.get("schemaVersion").and_then(Value::as_u64);
    let schema_warning = if found == Some(SCHEMA_VERSION) {
        None
    } else {
        let warning = MarkError::SchemaMismatch {
            found,
            expected: SCHEMA_VERSION,
        };
        log::warn!("{}", warning);
        Some(warning)
    };

    let settings: Config = field_or_default(&value, "settings");
    let marks: Vec<Mark> = field_or_default(&value, "marks");
    let last_changed_mark: Option<Mark> = field_or_default(&value, "lastChangedMark");

    LoadedState {
        state: PersistedState {
            schema_version: SCHEMA_VERSION,
            settings,
            marks: dedup_symbols(marks),
            last_changed_mark,
        },
        schema_warning,
    }
}

fn field_or_default<T: DeserializeOwned + Default>(value: &Value, key: &str) -> T {
    match value.get(key) {
        Some(field) => serde_json::from_value(field.clone()).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable '{}' in state file: {}", key, e);
            T::default()
        }),
        None => T::default(),
    }
}

/// Keeps the last binding of each symbol; a hand-edited file may repeat one.
fn dedup_symbols(marks: Vec<Mark>) -> Vec<Mark> {
    let mut out: Vec<Mark> = Vec::with_capacity(marks.len());
    for mark in marks {
        out.retain(|m| m.symbol != mark.symbol);
        out.push(mark);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_current_schema() {
        let loaded = parse_state(
            r#"{"schemaVersion":1,"marks":[{"symbol":"a","filePath":"a.md"}],"lastChangedMark":null}"#,
        );
        assert!(loaded.schema_warning.is_none());
        assert_eq!(loaded.state.marks, vec![Mark::new("a", "a.md")]);
        assert_eq!(loaded.state.settings, Config::default());
    }

    #[test]
    fn test_legacy_last_changed_array_is_ignored() {
        let loaded = parse_state(r#"{"schemaVersion":1,"marks":[],"lastChangedMark":[]}"#);
        assert!(loaded.state.last_changed_mark.is_none());
    }

    #[test]
    fn test_duplicate_symbols_collapse() {
        let loaded = parse_state(
            r#"{"schemaVersion":1,"marks":[{"symbol":"a","filePath":"1.md"},{"symbol":"a","filePath":"2.md"}]}"#,
        );
        assert_eq!(loaded.state.marks, vec![Mark::new("a", "2.md")]);
    }
}
