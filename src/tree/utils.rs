//! Shared helpers for tree walking and rendering

use std::path::{Component, Path};

/// Connector for a sibling that has later siblings.
pub const BRANCH: &str = "├── ";
/// Connector for the last sibling in a group.
pub const LAST_BRANCH: &str = "└── ";

/// Connector glyph for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for child entries.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", current_prefix)
    } else {
        format!("{}│   ", current_prefix)
    }
}

/// Path of `path` relative to `root`, joined with `/` on every platform.
///
/// Returns `None` if `path` is not under `root`.
pub fn relative_slash_path(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

/// Get the display name of a path, falling back to the full path for roots like `/`.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
