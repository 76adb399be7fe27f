// Rust guideline compliant 2026-02-06

//! Log subscriber setup.
//!
//! Log events go to stderr so stdout carries only the progress lines.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs a global `fmt` subscriber writing to stderr.
///
/// # Arguments
///
/// * `level` - Maximum level name (`error`, `warn`, `info`, `debug`, `trace`)
///
/// # Errors
///
/// Returns an error if the level name is not recognised.
pub fn init_tracing(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a case-insensitive level name.
///
/// # Errors
///
/// Returns an error for unknown names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}
