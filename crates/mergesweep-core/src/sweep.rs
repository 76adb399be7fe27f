// Rust guideline compliant 2026-02-06

//! Scan-then-resolve driver with progress output.

use crate::{scan, Config, Error, Resolver, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Totals for one sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Files flagged by the scanner.
    pub candidates: usize,
    /// Files in which at least one block was replaced.
    pub changed: usize,
    /// Conflict blocks replaced across all files.
    pub blocks: usize,
    /// Files that still contain a start marker after rewriting.
    pub unresolved: Vec<PathBuf>,
}

/// Scans `root` and resolves every flagged file, writing progress lines to
/// `out`.
///
/// # Arguments
///
/// * `root` - Directory to sweep
/// * `config` - Candidate filter
/// * `out` - Destination for the progress lines
///
/// # Returns
///
/// A summary of the sweep.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - Any flagged file cannot be read or written; files after it are not
///   touched
/// - Writing a progress line fails
pub fn sweep<W: Write>(root: &Path, config: &Config, out: &mut W) -> Result<SweepSummary> {
    config.validate()?;

    let candidates = scan(root, config);
    progress(out, format_args!("Found {} files with conflicts", candidates.len()))?;

    let resolver = Resolver::new();
    let mut summary = SweepSummary {
        candidates: candidates.len(),
        ..SweepSummary::default()
    };

    for path in &candidates {
        progress(out, format_args!("Resolving conflicts in {}", path.display()))?;
        let resolution = resolver.resolve_file(path)?;
        if resolution.blocks > 0 {
            summary.changed += 1;
        }
        summary.blocks += resolution.blocks;
        if resolution.unresolved {
            summary.unresolved.push(resolution.path);
        }
    }

    progress(out, format_args!("All conflicts resolved!"))?;
    info!(
        files = summary.changed,
        blocks = summary.blocks,
        unresolved = summary.unresolved.len(),
        "sweep complete"
    );

    Ok(summary)
}

fn progress<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{}", line).map_err(Error::Output)
}
