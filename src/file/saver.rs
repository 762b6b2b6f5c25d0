//! State file saving.
//!
//! This module writes the persisted state blob atomically (temp file, then
//! rename) and can keep a `.bak` copy of the previous file.

use super::PersistedState;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Saves the state blob as pretty JSON.
///
/// When `backup` is true and the target exists, it is first copied to
/// `<name>.bak`. Used to preserve data written by another schema version.
///
/// # Examples
///
/// ```no_run
/// use tethermarks::file::saver::save_state_file;
/// use tethermarks::file::PersistedState;
///
/// save_state_file("data.json", &PersistedState::default(), false).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the backup, the temp file write, or the rename fails.
pub fn save_state_file<P: AsRef<Path>>(path: P, state: &PersistedState, backup: bool) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("Failed to create state directory")?;
        }
    }

    if backup && path.exists() {
        create_backup(path)?;
    }

    let mut json = serde_json::to_string_pretty(state).context("Failed to serialize state")?;
    json.push('\n');
    write_file_atomic(path, json.as_bytes())?;
    log::debug!("Saved {} marks to {}", state.marks.len(), path.display());

    Ok(())
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup(path: &Path) -> Result<()> {
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}

/// Writes data to a file atomically.
fn write_file_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, data).context("Failed to write temp file")?;
    fs::rename(&temp_path, path).context("Failed to rename temp file")?;
    Ok(())
}
