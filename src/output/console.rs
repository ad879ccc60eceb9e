//! Console banner, progress and completion summary

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::stats::ScanState;
use crate::tree::ScanObserver;

const BANNER_RULE_WIDTH: usize = 60;

/// Writes human-facing progress to a terminal (or any `WriteColor`).
pub struct ConsoleReporter<W: WriteColor = StandardStream> {
    out: W,
}

impl ConsoleReporter<StandardStream> {
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn heading(&mut self, text: &str) -> io::Result<()> {
        let mut bold = ColorSpec::new();
        bold.set_bold(true);
        self.out.set_color(&bold)?;
        writeln!(self.out, "{}", text)?;
        self.out.reset()
    }

    pub fn banner(&mut self, pattern_count: usize, root: &Path) -> io::Result<()> {
        writeln!(self.out)?;
        self.heading("Project tree scan starting…")?;
        writeln!(self.out, "Ignore patterns loaded: {}", pattern_count)?;
        writeln!(self.out, "Root: {}", root.display())?;
        writeln!(self.out, "{}", "-".repeat(BANNER_RULE_WIDTH))?;
        self.out.flush()
    }

    pub fn progress(&mut self, state: &ScanState) -> io::Result<()> {
        let mut color = ColorSpec::new();
        color.set_fg(Some(Color::Cyan));
        self.out.set_color(&color)?;
        writeln!(
            self.out,
            "Scanning… {} files, {} dirs, {} lines",
            state.files, state.directories, state.lines
        )?;
        self.out.reset()?;
        self.out.flush()
    }

    pub fn summary(
        &mut self,
        state: &ScanState,
        elapsed: Duration,
        report_path: &Path,
    ) -> io::Result<()> {
        writeln!(self.out)?;
        self.heading("Scan complete.")?;
        writeln!(self.out, "Files: {}", state.files)?;
        writeln!(self.out, "Dirs: {}", state.directories)?;
        writeln!(self.out, "Lines: {}", state.lines)?;
        writeln!(self.out, "Time: {:.2}s", elapsed.as_secs_f64())?;
        writeln!(self.out, "Report written to: {}", report_path.display())?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: WriteColor> ScanObserver for ConsoleReporter<W> {
    fn on_progress(&mut self, state: &ScanState) {
        if let Err(e) = self.progress(state) {
            log::debug!("failed to write progress: {}", e);
        }
    }
}
