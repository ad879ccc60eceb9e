//! Fatal error types
//!
//! Only failures that end a run live here. Per-entry problems during the
//! walk (unlistable directories, unreadable files) are recovered where they
//! happen and never become a `ScanError`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read ignore file '{}': {source}", path.display())]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot access '{}': {source}", path.display())]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report '{}': {source}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = ScanError::WriteReport {
            path: PathBuf::from("/tmp/out.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/out.txt"), "got: {}", msg);
        assert!(msg.contains("denied"), "got: {}", msg);
    }
}
