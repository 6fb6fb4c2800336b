use crate::error::Result;
use crate::fs::discover_files;
use crate::ops::find_stragglers;
use crate::report::{self, RunReport};
use crate::rewrite::{PackageRules, fix_file};
use crate::validation::preflight_checks;
use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_NAMESPACE: &str = "com.zeroscam";
pub const DEFAULT_OLD: &str = "core_domain";
pub const DEFAULT_NEW: &str = "coredomain";
pub const DEFAULT_EXTENSION: &str = "kt";

#[derive(Args, Debug, Clone)]
pub struct FixArgs {
    /// Directory to scan recursively (defaults to the current directory)
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Package prefix in front of the misspelled segment
    #[arg(long, value_name = "NS", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Misspelled segment to replace; files containing it are rewritten
    #[arg(long, value_name = "SEGMENT", default_value = DEFAULT_OLD)]
    pub old: String,

    /// Corrected spelling of the segment
    #[arg(long, value_name = "SEGMENT", default_value = DEFAULT_NEW)]
    pub new: String,

    /// Suffix of candidate files, without the dot
    #[arg(long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub extension: String,
}

impl Default for FixArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            namespace: DEFAULT_NAMESPACE.to_string(),
            old: DEFAULT_OLD.to_string(),
            new: DEFAULT_NEW.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Discovers candidates, fixes them one by one, then re-reads every
/// candidate to list the ones still holding the old segment.
///
/// The first read or write failure aborts the run; files fixed before it
/// stay fixed.
pub fn execute(args: FixArgs) -> Result<RunReport> {
    preflight_checks(&args.namespace, &args.old, &args.new, &args.extension)?;

    let rules = PackageRules::new(&args.namespace, &args.old, &args.new)?;

    log::debug!(
        "Rewriting {ns}.{old} -> {ns}.{new} under {root}",
        ns = args.namespace,
        old = rules.marker(),
        new = rules.replacement(),
        root = args.root.display()
    );

    let files = discover_files(&args.root, &args.extension)?;
    let mut report = RunReport::new(files.len());
    report::print_discovered(report.discovered, &args.extension);

    for path in &files {
        if fix_file(path, &rules)? {
            report::print_fixed(path);
            report.record_fixed(path.clone());
        }
    }

    report::print_total(&report);

    report::print_verification_header();
    for path in find_stragglers(&files, rules.marker())? {
        report.record_straggler(path);
    }
    report::print_verification(&report, rules.marker());

    Ok(report)
}
