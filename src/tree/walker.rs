//! TreeWalker - walks a scan root into tree lines and totals

use std::path::Path;

use crate::stats::ScanState;

use super::config::WalkerConfig;
use super::filter::IgnoreFilter;
use super::traversal::{Traversal, TreeLine};

/// Receives progress notifications while a walk is running.
pub trait ScanObserver {
    fn on_progress(&mut self, state: &ScanState);
}

/// Observer that discards progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ScanObserver for NoProgress {
    fn on_progress(&mut self, _state: &ScanState) {}
}

/// Lines and totals produced by a finished walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub lines: Vec<TreeLine>,
    pub state: ScanState,
}

impl ScanResult {
    /// Rendered tree lines, without the root line.
    pub fn rendered_lines(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.to_string()).collect()
    }
}

/// Sequential depth-first walker.
///
/// Recursion follows directory nesting, so depth is bounded by the thread's
/// stack. Symlinks are never followed, which is what keeps the walk finite.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk everything under `root`. The root itself is neither emitted nor counted.
    pub fn walk<O: ScanObserver>(&self, root: &Path, observer: &mut O) -> ScanResult {
        let filter = IgnoreFilter::new(root, &self.config.ignore_patterns);
        let mut traversal = Traversal::new(&filter, self.config.progress_interval, observer);
        let lines = traversal.walk_dir(root, "");
        ScanResult {
            lines,
            state: traversal.state,
        }
    }
}
