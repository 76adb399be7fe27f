// Rust guideline compliant 2026-02-06

//! Configuration for the candidate file filter.

use crate::{Error, Result};

/// File-name suffixes considered for scanning.
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".tsx", ".ts"];

/// Directory substrings that admit a file for scanning.
pub const DEFAULT_DIR_FRAGMENTS: [&str; 2] = ["client", "server"];

/// Filter settings for the scanner.
///
/// The defaults are the only values the binary ever uses; the struct exists so
/// tests and library callers can point the scanner at other layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Accepted file-name suffixes, matched with `ends_with`.
    pub extensions: Vec<String>,

    /// Substrings, at least one of which must appear in the file's directory
    /// path relative to the scan root.
    pub dir_fragments: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            dir_fragments: DEFAULT_DIR_FRAGMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `extensions` or `dir_fragments` is empty
    /// - any entry in either list is an empty string
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(Error::InvalidConfig(
                "extensions must not be empty".to_string(),
            ));
        }

        if self.dir_fragments.is_empty() {
            return Err(Error::InvalidConfig(
                "dir_fragments must not be empty".to_string(),
            ));
        }

        if self.extensions.iter().any(String::is_empty) {
            return Err(Error::InvalidConfig(
                "extensions must not contain empty entries".to_string(),
            ));
        }

        if self.dir_fragments.iter().any(String::is_empty) {
            return Err(Error::InvalidConfig(
                "dir_fragments must not contain empty entries".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns true if `file_name` ends with one of the accepted suffixes.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }

    /// Returns true if `dir` contains one of the accepted substrings.
    pub fn matches_dir(&self, dir: &str) -> bool {
        self.dir_fragments
            .iter()
            .any(|fragment| dir.contains(fragment.as_str()))
    }
}
