//! Mark engine and picker state.
//!
//! # Modules
//!
//! - `marks`: pure operations over a mark collection
//! - `registers`: register lists and ordering
//! - `view`: the filtered, ordered list shown for a scope
//! - `mode`: picker modes and mark scopes
//! - `session`: the facade owning live marks and the last-changed mark
//! - `picker`: highlighted row and lifecycle of one picker invocation
//!
//! # Example
//!
//! ```
//! use tethermarks::editor::marks::{compact_harpoon_gaps, Mark};
//! use tethermarks::editor::registers::RegisterList;
//!
//! let marks = vec![Mark::new("h", "a.md"), Mark::new("k", "b.md")];
//! let compacted = compact_harpoon_gaps(&marks, &RegisterList::parse("hjkl"));
//! assert!(compacted.contains(&Mark::new("j", "b.md")));
//! ```

pub mod marks;
pub mod mode;
pub mod picker;
pub mod registers;
pub mod session;
pub mod view;
