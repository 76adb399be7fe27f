// Rust guideline compliant 2026-02-06

//! Error types for the Mergesweep core library.
//!
//! Only resolution and configuration can fail. Discovery swallows its errors
//! and never produces one of these.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Mergesweep operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Mergesweep operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a progress line failed.
    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),

    /// Invalid configuration.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Wraps an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
