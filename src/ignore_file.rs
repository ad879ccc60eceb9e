//! Loading of `tree_ignore.txt`

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, ScanError};

/// File name looked up in the scan root when no ignore file is given.
pub const IGNORE_FILE_NAME: &str = "tree_ignore.txt";

/// Read ignore patterns from `path`.
///
/// A missing file yields no patterns. A file that exists but cannot be read
/// as UTF-8 text is an error.
pub fn load_ignore_patterns(path: &Path) -> Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let patterns = parse_ignore_patterns(&content);
            log::debug!(
                "loaded {} ignore patterns from {}",
                patterns.len(),
                path.display()
            );
            Ok(patterns)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("no ignore file at {}", path.display());
            Ok(Vec::new())
        }
        Err(source) => Err(ScanError::IgnoreFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Split ignore file content into patterns, dropping blank lines and `#` comments.
pub fn parse_ignore_patterns(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
