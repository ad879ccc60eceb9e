//! Plain-text scan report
//!
//! `build_report` assembles a `Report` from a finished scan without doing
//! any I/O; `Report::write_to` is the only place the report touches disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDateTime;

use crate::error::{Result, ScanError};
use crate::stats::ScanState;
use crate::tree::TreeLine;

const TITLE: &str = "Project Tree Report";
const SECTION_RULE_WIDTH: usize = 60;
const INTERPRETATION: &str = "This is a structural snapshot of your repository. \
It reflects architecture, complexity, and surface area. \
If this feels large, it’s because the project is doing real work.";

/// Timestamp format used in report file names.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
/// ISO-8601 format for the `Generated:` header.
const GENERATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A finished scan, ready to render.
#[derive(Debug, Clone)]
pub struct Report {
    pub generated: NaiveDateTime,
    pub root_path: PathBuf,
    pub root_name: String,
    pub tree_lines: Vec<String>,
    pub state: ScanState,
    pub elapsed: Duration,
}

pub fn build_report(
    root_name: &str,
    tree_lines: &[TreeLine],
    state: ScanState,
    elapsed: Duration,
    root_path: &Path,
    generated: NaiveDateTime,
) -> Report {
    Report {
        generated,
        root_path: root_path.to_path_buf(),
        root_name: root_name.to_string(),
        tree_lines: tree_lines.iter().map(|l| l.to_string()).collect(),
        state,
        elapsed,
    }
}

impl Report {
    /// Render the report. Lines are joined with `\n` and there is no trailing newline.
    pub fn render(&self) -> String {
        let rule = "=".repeat(SECTION_RULE_WIDTH);
        let mut out: Vec<String> = Vec::with_capacity(self.tree_lines.len() + 20);

        out.push(TITLE.to_string());
        out.push(format!("Generated: {}", self.generated.format(GENERATED_FORMAT)));
        out.push(format!("Root: {}", self.root_path.display()));
        out.push(String::new());

        out.push("ASCII TREE".to_string());
        out.push(rule.clone());
        out.push(self.root_name.clone());
        out.extend(self.tree_lines.iter().cloned());
        out.push(String::new());

        out.push("PROJECT METRICS".to_string());
        out.push(rule);
        out.push(format!("Directories: {}", self.state.directories));
        out.push(format!("Files:       {}", self.state.files));
        out.push(format!("Lines of code: {}", self.state.lines));
        out.push(format!("Scan time:    {:.2} seconds", self.elapsed.as_secs_f64()));
        out.push(String::new());

        out.push("Interpretation:".to_string());
        out.push(INTERPRETATION.to_string());

        out.join("\n")
    }

    /// Write the rendered report to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()).map_err(|source| ScanError::WriteReport {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `project_tree_<YYYY-MM-DD_HH-MM-SS>.txt`
pub fn report_file_name(timestamp: &NaiveDateTime) -> String {
    format!("project_tree_{}.txt", timestamp.format(FILE_TIMESTAMP_FORMAT))
}
