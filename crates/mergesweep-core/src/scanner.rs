// Rust guideline compliant 2026-02-06

//! Discovery of files that still contain conflict markers.
//!
//! Discovery never fails. Unreadable directories, unreadable files and files
//! that are not valid UTF-8 are dropped from the result and logged at debug
//! level.

use crate::markers::START_MARKER;
use crate::Config;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Walks `root` and returns every file that passes the path filter and
/// contains the conflict start marker.
///
/// # Arguments
///
/// * `root` - Directory to walk
/// * `config` - Extension and directory filter
///
/// # Returns
///
/// Candidate paths in walk order (depth-first, sorted by file name within
/// each directory). Each path is `root` joined with the file's relative path.
pub fn scan(root: &Path, config: &Config) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let relative_dir = path
            .parent()
            .and_then(|parent| parent.strip_prefix(root).ok())
            .unwrap_or_else(|| Path::new(""));
        let file_name = entry.file_name().to_string_lossy();

        if !is_candidate_path(&relative_dir.to_string_lossy(), &file_name, config) {
            continue;
        }

        match has_conflict_marker(path) {
            Some(true) => candidates.push(path.to_path_buf()),
            Some(false) => {}
            None => debug!(path = %path.display(), "skipping unreadable file"),
        }
    }

    candidates
}

/// Applies the extension and directory filter.
///
/// `relative_dir` is the directory portion of the path relative to the scan
/// root, so the root's own name never admits a file.
pub fn is_candidate_path(relative_dir: &str, file_name: &str, config: &Config) -> bool {
    config.matches_extension(file_name) && config.matches_dir(relative_dir)
}

/// Checks whether the file at `path` contains the start marker.
///
/// # Returns
///
/// `None` if the file cannot be read as UTF-8 text.
pub fn has_conflict_marker(path: &Path) -> Option<bool> {
    std::fs::read_to_string(path)
        .ok()
        .map(|content| content.contains(START_MARKER))
}
