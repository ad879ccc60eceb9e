//! Recursive directory traversal that renders tree lines and accumulates counters.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::stats::{LineCount, ScanState, SkipReason, count_lines};

use super::filter::IgnoreFilter;
use super::utils::{child_prefix, connector};
use super::walker::ScanObserver;

/// What kind of filesystem node an entry is. Symlinks never get this far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Sockets, fifos and devices: counted as files but never opened
    Other,
}

/// A listed, filtered child of a directory.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// One rendered row of the ASCII tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub prefix: String,
    pub name: String,
    pub is_last: bool,
    pub is_dir: bool,
}

impl std::fmt::Display for TreeLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.prefix, connector(self.is_last), self.name)
    }
}

/// State for a single walk: the filter, the counters and the progress sink.
pub struct Traversal<'a, O: ScanObserver> {
    filter: &'a IgnoreFilter,
    progress_interval: usize,
    observer: &'a mut O,
    pub state: ScanState,
}

impl<'a, O: ScanObserver> Traversal<'a, O> {
    pub fn new(filter: &'a IgnoreFilter, progress_interval: usize, observer: &'a mut O) -> Self {
        Self {
            filter,
            progress_interval,
            observer,
            state: ScanState::new(),
        }
    }

    /// Walk `dir`, returning its rendered subtree.
    ///
    /// A directory that cannot be listed yields no lines; whatever the caller
    /// already recorded for it stays.
    pub fn walk_dir(&mut self, dir: &Path, prefix: &str) -> Vec<TreeLine> {
        let entries = match self.read_and_filter_entries(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("cannot list {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut lines = Vec::new();
        let total = entries.len();

        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i == total - 1;
            let is_dir = entry.kind == EntryKind::Directory;

            lines.push(TreeLine {
                prefix: prefix.to_string(),
                name: entry.name,
                is_last,
                is_dir,
            });

            match entry.kind {
                EntryKind::Directory => {
                    self.state.record_directory();
                    let new_prefix = child_prefix(prefix, is_last);
                    lines.extend(self.walk_dir(&entry.path, &new_prefix));
                }
                EntryKind::File => {
                    let count = count_lines(&entry.path);
                    if let LineCount::Skipped(reason) = count {
                        log::debug!("not counting lines of {}: {}", entry.path.display(), reason);
                    }
                    self.state.record_file(&count);
                }
                EntryKind::Other => {
                    self.state.record_file(&LineCount::Skipped(SkipReason::NotRegular));
                }
            }

            self.maybe_report_progress();
        }

        lines
    }

    fn maybe_report_progress(&mut self) {
        let files = self.state.files;
        if self.progress_interval > 0 && files > 0 && files % self.progress_interval == 0 {
            self.observer.on_progress(&self.state);
        }
    }

    /// Read, filter, and sort directory entries.
    ///
    /// Symlinks are dropped regardless of their target. Directories sort
    /// before everything else, then names compare case-insensitively.
    pub fn read_and_filter_entries(&self, dir: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir)?.filter_map(|e| e.ok()) {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_symlink() {
                continue;
            }

            let path = entry.path();
            if self.filter.is_ignored(&path) {
                continue;
            }

            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            entries.push(Entry {
                name: entry.file_name().to_string_lossy().to_string(),
                path,
                kind,
            });
        }

        entries.sort_by_cached_key(|e| {
            (
                e.kind != EntryKind::Directory,
                e.name.to_lowercase(),
                e.name.clone(),
            )
        });

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NoProgress;
    use tempfile::TempDir;

    #[test]
    fn test_unlistable_directory_yields_empty_subtree() {
        let dir = TempDir::new().unwrap();
        let not_a_dir = dir.path().join("plain.txt");
        fs::write(&not_a_dir, "1\n2\n").unwrap();

        let filter = IgnoreFilter::new(dir.path(), &[] as &[&str]);
        let mut observer = NoProgress;
        let mut traversal = Traversal::new(&filter, 200, &mut observer);

        assert!(traversal.walk_dir(&not_a_dir, "│   ").is_empty());
        assert_eq!(traversal.state, ScanState::new());

        assert!(traversal.walk_dir(&dir.path().join("missing"), "").is_empty());
        assert_eq!(traversal.state, ScanState::new());
    }

    #[test]
    fn test_unlistable_child_keeps_its_line_and_count() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/a.txt"), "x\n").unwrap();

        let filter = IgnoreFilter::new(dir.path(), &[] as &[&str]);
        let mut observer = NoProgress;
        let mut traversal = Traversal::new(&filter, 200, &mut observer);

        let mut entries = traversal.read_and_filter_entries(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        // Remove the directory between listing and descending
        fs::remove_dir_all(&entries[0].path).unwrap();
        let sub = entries.remove(0);

        traversal.state.record_directory();
        let lines = traversal.walk_dir(&sub.path, &child_prefix("", true));
        assert!(lines.is_empty());
        assert_eq!(traversal.state.directories, 1);
        assert_eq!(traversal.state.files, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_special_files_sort_with_files() {
        use std::os::unix::net::UnixListener;

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("z_dir")).unwrap();
        fs::write(dir.path().join("b.txt"), "1\n").unwrap();
        let _listener = UnixListener::bind(dir.path().join("a.sock")).unwrap();

        let filter = IgnoreFilter::new(dir.path(), &[] as &[&str]);
        let mut observer = NoProgress;
        let mut traversal = Traversal::new(&filter, 200, &mut observer);

        let entries = traversal.read_and_filter_entries(dir.path()).unwrap();
        let order: Vec<(&str, EntryKind)> =
            entries.iter().map(|e| (e.name.as_str(), e.kind)).collect();
        assert_eq!(
            order,
            vec![
                ("z_dir", EntryKind::Directory),
                ("a.sock", EntryKind::Other),
                ("b.txt", EntryKind::File),
            ]
        );

        let lines: Vec<String> = traversal
            .walk_dir(dir.path(), "")
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(lines, vec!["├── z_dir", "├── a.sock", "└── b.txt"]);
        assert_eq!(traversal.state.files, 2);
        assert_eq!(traversal.state.lines, 1);
    }
}
