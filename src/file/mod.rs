//! Persistence of marks and settings.
//!
//! The whole state is one JSON blob:
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "settings": { "theme": "default-dark", "...": "..." },
//!   "marks": [{ "symbol": "a", "filePath": "notes/a.md" }],
//!   "lastChangedMark": null
//! }
//! ```

pub mod loader;
pub mod saver;

use crate::config::Config;
use crate::editor::marks::Mark;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Schema version written by this build.
pub const SCHEMA_VERSION: u64 = 1;

/// The persisted state blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub schema_version: u64,
    pub settings: Config,
    pub marks: Vec<Mark>,
    pub last_changed_mark: Option<Mark>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            settings: Config::default(),
            marks: Vec::new(),
            last_changed_mark: None,
        }
    }
}

/// Returns the default location of the state file,
/// `<data_dir>/tethermarks/data.json`.
pub fn default_state_path() -> Option<PathBuf> {
    dirs::data_dir().map(|mut path| {
        path.push("tethermarks");
        path.push("data.json");
        path
    })
}
