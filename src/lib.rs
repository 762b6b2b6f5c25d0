//! Tether Marks: vim-style file marks and a Harpoon list.
//!
//! Marks bind single-keystroke registers to file paths. The [`editor`]
//! module holds the pure mark engine and the session facade, [`host`]
//! abstracts the editor that actually opens files, and [`ui`]/[`input`]
//! drive the modal mark list in a terminal.

pub mod config;
pub mod editor;
pub mod error;
pub mod file;
pub mod host;
pub mod input;
pub mod theme;
pub mod ui;
