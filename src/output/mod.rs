//! Report and console output
//!
//! - `report`: the plain-text report file written at the end of a scan
//! - `console`: banner, progress lines and summary printed while scanning

mod console;
mod report;

pub use console::ConsoleReporter;
pub use report::{FILE_TIMESTAMP_FORMAT, Report, build_report, report_file_name};
