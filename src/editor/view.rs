//! Builds the list of marks the picker displays.

use super::marks::Mark;
use super::mode::MarkScope;
use super::registers::sort_alphabetically;
use crate::config::Config;

/// Returns the marks visible in `scope`, filtered to the scope's register
/// list and ordered per the scope's sort-by-list flag.
///
/// Recomputed from scratch on every call so it always reflects the latest
/// collection.
///
/// # Example
///
/// ```
/// use tethermarks::config::Config;
/// use tethermarks::editor::marks::Mark;
/// use tethermarks::editor::mode::MarkScope;
/// use tethermarks::editor::view::resolve_visible_marks;
///
/// let config = Config {
///     register_list: "ABCDE".to_string(),
///     register_sort_by_list: true,
///     ..Config::default()
/// };
/// let marks = vec![Mark::new("C", "c.md"), Mark::new("F", "f.md"), Mark::new("A", "a.md")];
/// let visible = resolve_visible_marks(&marks, MarkScope::General, &config);
/// let symbols: Vec<_> = visible.map(|m| m.symbol).collect();
/// assert_eq!(symbols, vec!["A", "C"]);
/// ```
pub fn resolve_visible_marks(
    marks: &[Mark],
    scope: MarkScope,
    config: &Config,
) -> std::vec::IntoIter<Mark> {
    let registers = config.registers(scope);
    let mut visible: Vec<Mark> = marks
        .iter()
        .filter(|m| registers.admits(m))
        .cloned()
        .collect();

    if config.sort_by_list(scope) {
        registers.sort_by_list(&mut visible);
    } else {
        sort_alphabetically(&mut visible);
    }

    visible.into_iter()
}
