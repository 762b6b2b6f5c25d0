//! File access on behalf of the mark engine.
//!
//! The engine never opens files itself. It asks a [`Workspace`] whether a
//! path is already open somewhere, focuses that leaf if so, and otherwise
//! opens the path in a new or the current tab.
//!
//! How "already open" is decided depends on an [`OpenFileLocator`] chosen
//! once from configuration:
//!
//! - [`ExactLeafMatch`] looks only at leaves whose document is loaded.
//!   Tabs restored from a previous session but not yet viewed are missed.
//! - [`LayoutScan`] walks every leaf in the layout, loaded or not.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Identifier of a pane/tab in the host workspace.
pub type LeafId = usize;

/// A pane/tab showing a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub id: LeafId,
    pub path: String,
    /// False for leaves restored from a previous session whose view has not
    /// been created yet.
    pub loaded: bool,
}

/// Where to open a file that is not open yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    NewTab,
    CurrentTab,
}

impl OpenTarget {
    pub fn from_config(config: &Config) -> Self {
        if config.open_mark_in_new_tab {
            OpenTarget::NewTab
        } else {
            OpenTarget::CurrentTab
        }
    }
}

/// Something the workspace did in response to a goto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    Focus { leaf: LeafId, path: String },
    Open { path: String, target: OpenTarget },
}

impl HostAction {
    /// Renders the action as a tab-separated line for the calling editor.
    pub fn to_line(&self) -> String {
        match self {
            HostAction::Focus { leaf, path } => format!("focus\t{}\t{}", leaf, path),
            HostAction::Open {
                path,
                target: OpenTarget::NewTab,
            } => format!("open-tab\t{}", path),
            HostAction::Open {
                path,
                target: OpenTarget::CurrentTab,
            } => format!("open\t{}", path),
        }
    }
}

/// The host application's file and window capabilities.
pub trait Workspace {
    /// Path of the document currently being edited.
    fn active_file(&self) -> Option<String>;

    /// Every leaf in the layout.
    fn leaves(&self) -> Vec<Leaf>;

    /// Gives focus to a leaf. Returns false if it no longer exists.
    fn focus(&mut self, leaf: LeafId) -> bool;

    /// Returns true if `path` names an existing document.
    fn file_exists(&self, path: &str) -> bool;

    /// Opens `path` in a tab.
    fn open(&mut self, path: &str, target: OpenTarget) -> Result<()>;
}

/// Strategy for finding the leaf that already shows a path.
pub trait OpenFileLocator {
    fn locate(&self, workspace: &dyn Workspace, path: &str) -> Option<LeafId>;
}

/// Matches only loaded leaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactLeafMatch;

impl OpenFileLocator for ExactLeafMatch {
    fn locate(&self, workspace: &dyn Workspace, path: &str) -> Option<LeafId> {
        workspace
            .leaves()
            .into_iter()
            .find(|leaf| leaf.loaded && leaf.path == path)
            .map(|leaf| leaf.id)
    }
}

/// Matches any leaf in the layout, including restored ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutScan;

impl OpenFileLocator for LayoutScan {
    fn locate(&self, workspace: &dyn Workspace, path: &str) -> Option<LeafId> {
        workspace
            .leaves()
            .into_iter()
            .find(|leaf| leaf.path == path)
            .map(|leaf| leaf.id)
    }
}

/// Picks the locator strategy from `experimental_goto`.
pub fn locator_for(config: &Config) -> Box<dyn OpenFileLocator> {
    if config.experimental_goto {
        Box::new(LayoutScan)
    } else {
        Box::new(ExactLeafMatch)
    }
}

/// In-memory workspace described by the caller.
///
/// Paths are resolved against `root` when checking for existence. Every
/// focus/open is recorded so the caller can replay it.
#[derive(Debug, Clone, Default)]
pub struct SessionWorkspace {
    root: PathBuf,
    active: Option<String>,
    leaves: Vec<Leaf>,
    focused: Option<LeafId>,
    actions: Vec<HostAction>,
}

impl SessionWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Sets the active document. It is also added as a loaded leaf.
    pub fn with_active(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        let id = self.push_leaf(path.clone(), true);
        self.active = Some(path);
        self.focused = Some(id);
        self
    }

    /// Adds a leaf. Returns its id.
    pub fn push_leaf(&mut self, path: impl Into<String>, loaded: bool) -> LeafId {
        let id = self.leaves.len();
        self.leaves.push(Leaf {
            id,
            path: path.into(),
            loaded,
        });
        id
    }

    pub fn focused(&self) -> Option<LeafId> {
        self.focused
    }

    pub fn actions(&self) -> &[HostAction] {
        &self.actions
    }

    pub fn take_actions(&mut self) -> Vec<HostAction> {
        std::mem::take(&mut self.actions)
    }
}

impl Workspace for SessionWorkspace {
    fn active_file(&self) -> Option<String> {
        self.active.clone()
    }

    fn leaves(&self) -> Vec<Leaf> {
        self.leaves.clone()
    }

    fn focus(&mut self, leaf: LeafId) -> bool {
        let Some(found) = self.leaves.iter_mut().find(|l| l.id == leaf) else {
            return false;
        };
        // Focusing creates the view of a restored leaf.
        found.loaded = true;
        let path = found.path.clone();
        self.focused = Some(leaf);
        self.active = Some(path.clone());
        self.actions.push(HostAction::Focus { leaf, path });
        true
    }

    fn file_exists(&self, path: &str) -> bool {
        self.root.join(path).is_file()
    }

    fn open(&mut self, path: &str, target: OpenTarget) -> Result<()> {
        let id = match (target, self.focused) {
            (OpenTarget::CurrentTab, Some(current)) => {
                if let Some(leaf) = self.leaves.iter_mut().find(|l| l.id == current) {
                    leaf.path = path.to_string();
                    leaf.loaded = true;
                }
                current
            }
            _ => self.push_leaf(path, true),
        };
        self.focused = Some(id);
        self.active = Some(path.to_string());
        self.actions.push(HostAction::Open {
            path: path.to_string(),
            target,
        });
        Ok(())
    }
}
