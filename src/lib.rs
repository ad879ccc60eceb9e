//! Orchard - snapshot a project's directory tree, file and line counts into a report

pub mod error;
pub mod ignore_file;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::ScanError;
pub use ignore_file::{IGNORE_FILE_NAME, load_ignore_patterns, parse_ignore_patterns};
pub use output::{ConsoleReporter, Report, build_report, report_file_name};
pub use stats::{LineCount, ScanState, SkipReason, count_lines};
pub use tree::{IgnoreFilter, NoProgress, ScanObserver, ScanResult, TreeLine, TreeWalker, WalkerConfig};
