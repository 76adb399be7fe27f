// Rust guideline compliant 2026-02-06

//! Conflict block resolution.
//!
//! A block is matched line-wise:
//!
//! ```text
//! <<<<<<< HEAD
//! current side (dropped)
//! =======
//! incoming side (kept)
//! >>>>>>> jules-testing-merges
//! ```
//!
//! Each marker only has to start its line; the rest of the line (a
//! `HEAD:path` suffix, a commit note, trailing whitespace) belongs to the
//! marker and is dropped with it.
//!
//! Matching is leftmost-first and non-overlapping. The current side runs to
//! the first separator line and the incoming side to the first end marker
//! line after it. A block with no separator or no end marker does not match
//! and is left in place.

use crate::markers::{END_MARKER, SEPARATOR_MARKER, START_MARKER};
use crate::{Error, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of resolving one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// File that was rewritten.
    pub path: PathBuf,
    /// Number of conflict blocks replaced.
    pub blocks: usize,
    /// Whether a start marker is still present after rewriting.
    pub unresolved: bool,
}

/// Replaces conflict blocks with their incoming side.
#[derive(Debug, Clone)]
pub struct Resolver {
    pattern: Regex,
}

impl Resolver {
    /// Creates a resolver for the fixed `HEAD` / `jules-testing-merges`
    /// markers.
    pub fn new() -> Self {
        let source = format!(
            r"(?ms)^{start}[^\n]*\n.*?^{sep}[^\n]*\n(.*?)^{end}[^\n]*(?:\n|\z)",
            start = regex::escape(START_MARKER),
            sep = regex::escape(SEPARATOR_MARKER),
            end = regex::escape(END_MARKER),
        );
        let pattern = Regex::new(&source).expect("conflict pattern is valid");
        Self { pattern }
    }

    /// Resolves every conflict block in `content`.
    ///
    /// # Returns
    ///
    /// The rewritten text and the number of blocks replaced. Text outside
    /// matched blocks is copied unchanged.
    pub fn resolve_text(&self, content: &str) -> (String, usize) {
        let mut out = String::with_capacity(content.len());
        let mut last = 0;
        let mut blocks = 0;

        for caps in self.pattern.captures_iter(content) {
            let (Some(block), Some(incoming)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push_str(&content[last..block.start()]);
            out.push_str(incoming.as_str());
            last = block.end();
            blocks += 1;
        }

        out.push_str(&content[last..]);
        (out, blocks)
    }

    /// Resolves every conflict block in the file at `path`, rewriting it in
    /// place.
    ///
    /// The file is truncated and rewritten even when nothing matched. There is
    /// no backup and no atomic rename.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read as UTF-8 text
    /// - The file cannot be written
    pub fn resolve_file(&self, path: &Path) -> Result<Resolution> {
        let content = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        let (resolved, blocks) = self.resolve_text(&content);
        std::fs::write(path, &resolved).map_err(|err| Error::io(path, err))?;

        let unresolved = resolved.contains(START_MARKER);
        if unresolved {
            warn!(path = %path.display(), "conflict markers left unresolved");
        }
        debug!(path = %path.display(), blocks, "resolved file");

        Ok(Resolution {
            path: path.to_path_buf(),
            blocks,
            unresolved,
        })
    }
}
