// Rust guideline compliant 2026-02-06

//! Mergesweep CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod logging;

pub use logging::{init_tracing, parse_log_level};
