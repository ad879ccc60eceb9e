//! CLI entry point for orchard

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use chrono::Local;
use clap::{Parser, ValueEnum};
use orchard::error::Result;
use orchard::tree::display_name;
use orchard::{
    ConsoleReporter, IGNORE_FILE_NAME, ScanError, TreeWalker, WalkerConfig, build_report,
    load_ignore_patterns, report_file_name,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "orchard")]
#[command(about = "Write a timestamped tree and line-count report for a project directory")]
#[command(version)]
struct Args {
    /// Directory to scan (defaults to the current directory)
    path: Option<PathBuf>,

    /// Read ignore patterns from FILE instead of <root>/tree_ignore.txt
    #[arg(long = "ignore-file", value_name = "FILE")]
    ignore_file: Option<PathBuf>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("orchard: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let root = resolve_root(args.path.as_deref())?;
    let ignore_path = args
        .ignore_file
        .clone()
        .unwrap_or_else(|| root.join(IGNORE_FILE_NAME));
    let ignore_patterns = load_ignore_patterns(&ignore_path)?;

    let mut console = ConsoleReporter::stdout(should_use_color(args.color));
    if let Err(e) = console.banner(ignore_patterns.len(), &root) {
        log::debug!("failed to write banner: {}", e);
    }

    let walker = TreeWalker::new(WalkerConfig {
        ignore_patterns,
        ..Default::default()
    });

    let start = Instant::now();
    let result = walker.walk(&root, &mut console);
    let elapsed = start.elapsed();
    log::info!(
        "scanned {} entries under {} in {:?}",
        result.state.entries(),
        root.display(),
        elapsed
    );

    let generated = Local::now().naive_local();
    let report_path = root.join(report_file_name(&generated));
    let report = build_report(
        &display_name(&root),
        &result.lines,
        result.state,
        elapsed,
        &root,
        generated,
    );
    report.write_to(&report_path)?;

    if let Err(e) = console.summary(&result.state, elapsed, &report_path) {
        log::debug!("failed to write summary: {}", e);
    }
    Ok(())
}

/// Make the scan root absolute and canonical, defaulting to the working directory.
fn resolve_root(path: Option<&Path>) -> Result<PathBuf> {
    let requested = path.unwrap_or(Path::new("."));
    let invalid = |source| ScanError::InvalidRoot {
        path: requested.to_path_buf(),
        source,
    };

    let root = std::fs::canonicalize(requested).map_err(invalid)?;
    if !root.is_dir() {
        return Err(invalid(std::io::Error::new(
            std::io::ErrorKind::NotADirectory,
            "not a directory",
        )));
    }
    Ok(root)
}
