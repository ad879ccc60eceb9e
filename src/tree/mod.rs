//! Directory tree walking logic
//!
//! `TreeWalker` walks a scan root depth-first, skipping symlinks and
//! ignored paths, and returns the rendered tree lines together with the
//! directory, file and line totals.

mod config;
mod filter;
mod traversal;
mod utils;
mod walker;

pub use config::{DEFAULT_PROGRESS_INTERVAL, WalkerConfig};
pub use filter::{IgnoreFilter, IgnorePattern};
pub use traversal::{Entry, EntryKind, TreeLine};
pub use utils::{BRANCH, LAST_BRANCH, display_name, relative_slash_path};
pub use walker::{NoProgress, ScanObserver, ScanResult, TreeWalker};
