//! Run summary and console rendering.
//!
//! [`RunReport`] is built up while the run progresses; the `print_*`
//! functions emit each section at the moment the run reaches it.

use colored::Colorize;
use std::path::{Path, PathBuf};

/// Maximum number of stragglers listed by name.
pub const STRAGGLER_DISPLAY_LIMIT: usize = 10;

/// Counts and leftovers of a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Number of candidate files discovered.
    pub discovered: usize,
    /// Files rewritten during the fix pass, in processing order.
    pub fixed: Vec<PathBuf>,
    /// Files still containing the marker after the fix pass.
    pub stragglers: Vec<PathBuf>,
}

impl RunReport {
    pub fn new(discovered: usize) -> Self {
        Self {
            discovered,
            ..Self::default()
        }
    }

    pub fn record_fixed(&mut self, path: PathBuf) {
        self.fixed.push(path);
    }

    pub fn record_straggler(&mut self, path: PathBuf) {
        self.stragglers.push(path);
    }

    pub fn fixed_count(&self) -> usize {
        self.fixed.len()
    }

    pub fn is_consistent(&self) -> bool {
        self.stragglers.is_empty()
    }

    /// Stragglers shown by name (at most [`STRAGGLER_DISPLAY_LIMIT`]).
    pub fn shown_stragglers(&self) -> &[PathBuf] {
        let end = self.stragglers.len().min(STRAGGLER_DISPLAY_LIMIT);
        &self.stragglers[..end]
    }

    /// Stragglers beyond the display cap, reported only as a count.
    pub fn hidden_stragglers(&self) -> usize {
        self.stragglers.len().saturating_sub(STRAGGLER_DISPLAY_LIMIT)
    }
}

pub fn print_discovered(count: usize, extension: &str) {
    println!(
        "{} Scanning {} .{} files",
        "🔍".bold(),
        count.to_string().bold(),
        extension
    );
}

pub fn print_fixed(path: &Path) {
    println!("{} Fixed: {}", "✅".green(), path.display());
}

pub fn print_total(report: &RunReport) {
    println!(
        "\n{} Total fixed: {} files",
        "🎯".bold(),
        report.fixed_count().to_string().green().bold()
    );
}

pub fn print_verification_header() {
    println!("\n{} Final verification...", "🔍".bold());
}

pub fn print_verification(report: &RunReport, marker: &str) {
    if report.is_consistent() {
        println!("{}", "✅ All files are consistent".green());
        return;
    }

    println!(
        "{} {}",
        "⚠️  Files still containing".yellow().bold(),
        format!("{}:", marker).yellow().bold()
    );
    for path in report.shown_stragglers() {
        println!("  - {}", path.display());
    }

    let hidden = report.hidden_stragglers();
    if hidden > 0 {
        println!("  ... and {} more", hidden);
    }
}
