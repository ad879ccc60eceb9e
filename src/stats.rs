//! Scan counters and per-file line counting
//!
//! `ScanState` accumulates directory, file and line totals while the walker
//! runs. Line counting returns a typed `LineCount` so that files which
//! cannot be read as text are visible to the caller instead of silently
//! swallowed.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Bytes inspected for NUL when deciding whether a file is binary.
const BINARY_SNIFF_LEN: usize = 8192;
/// Read buffer size for line counting.
const READ_CHUNK_LEN: usize = 64 * 1024;

/// Running totals for a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    pub files: usize,
    pub directories: usize,
    pub lines: usize,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directory.
    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    /// Record a file and its line count outcome.
    pub fn record_file(&mut self, count: &LineCount) {
        self.files += 1;
        self.lines += count.lines();
    }

    /// Total number of entries recorded.
    pub fn entries(&self) -> usize {
        self.files + self.directories
    }
}

/// Why a file contributed no lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Opening or reading failed
    Unreadable(io::ErrorKind),
    /// Content is not valid UTF-8
    NotUtf8,
    /// Content contains NUL bytes
    Binary,
    /// Not a regular file (socket, fifo, device)
    NotRegular,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable(kind) => write!(f, "unreadable ({})", kind),
            SkipReason::NotUtf8 => write!(f, "not valid UTF-8"),
            SkipReason::Binary => write!(f, "binary content"),
            SkipReason::NotRegular => write!(f, "not a regular file"),
        }
    }
}

/// Outcome of counting the lines of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCount {
    Counted(usize),
    Skipped(SkipReason),
}

impl LineCount {
    /// Lines contributed to the total; skipped files contribute zero.
    pub fn lines(&self) -> usize {
        match self {
            LineCount::Counted(n) => *n,
            LineCount::Skipped(_) => 0,
        }
    }
}

/// Count newline-delimited lines in a text file.
///
/// The file is streamed in chunks, so memory stays bounded by the buffer no
/// matter how large the file is. A final line without a trailing newline
/// still counts. The file handle is dropped before this returns on every
/// path.
pub fn count_lines(path: &Path) -> LineCount {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return LineCount::Skipped(SkipReason::Unreadable(e.kind())),
    };
    let mut reader = BufReader::with_capacity(READ_CHUNK_LEN, file);
    let mut counter = LineCounter::default();

    loop {
        let chunk = match reader.fill_buf() {
            Ok([]) => break,
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return LineCount::Skipped(SkipReason::Unreadable(e.kind())),
        };
        let len = chunk.len();
        if let Some(reason) = counter.feed(chunk) {
            return LineCount::Skipped(reason);
        }
        reader.consume(len);
    }

    counter.finish()
}

/// Incremental newline counter with binary sniffing and UTF-8 validation.
#[derive(Debug, Default)]
struct LineCounter {
    bytes: usize,
    newlines: usize,
    last: Option<u8>,
    /// Start of a multi-byte character split across chunks
    utf8_tail: Vec<u8>,
    invalid_utf8: bool,
}

impl LineCounter {
    /// Consume the next chunk. Returns a reason once the file is known to be skipped.
    fn feed(&mut self, chunk: &[u8]) -> Option<SkipReason> {
        if self.bytes < BINARY_SNIFF_LEN {
            let window = chunk.len().min(BINARY_SNIFF_LEN - self.bytes);
            if chunk[..window].contains(&0) {
                return Some(SkipReason::Binary);
            }
        }
        self.bytes += chunk.len();

        if !self.invalid_utf8 && !self.validate_utf8(chunk) {
            self.invalid_utf8 = true;
        }
        // A NUL later in the sniff window still makes the file binary
        if self.invalid_utf8 && self.bytes >= BINARY_SNIFF_LEN {
            return Some(SkipReason::NotUtf8);
        }

        self.newlines += chunk.iter().filter(|&&b| b == b'\n').count();
        if let Some(&b) = chunk.last() {
            self.last = Some(b);
        }
        None
    }

    fn validate_utf8(&mut self, mut chunk: &[u8]) -> bool {
        while !self.utf8_tail.is_empty() {
            let Some((&b, rest)) = chunk.split_first() else {
                return true;
            };
            self.utf8_tail.push(b);
            chunk = rest;
            match std::str::from_utf8(&self.utf8_tail) {
                Ok(_) => self.utf8_tail.clear(),
                Err(e) if e.error_len().is_none() => {}
                Err(_) => return false,
            }
        }

        match std::str::from_utf8(chunk) {
            Ok(_) => true,
            Err(e) if e.error_len().is_none() => {
                self.utf8_tail.extend_from_slice(&chunk[e.valid_up_to()..]);
                true
            }
            Err(_) => false,
        }
    }

    fn finish(self) -> LineCount {
        if self.invalid_utf8 || !self.utf8_tail.is_empty() {
            return LineCount::Skipped(SkipReason::NotUtf8);
        }
        match self.last {
            None | Some(b'\n') => LineCount::Counted(self.newlines),
            Some(_) => LineCount::Counted(self.newlines + 1),
        }
    }
}
