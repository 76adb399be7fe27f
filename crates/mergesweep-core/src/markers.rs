// Rust guideline compliant 2026-02-06

//! Conflict marker literals.
//!
//! The current side is always `HEAD`; the incoming side is always
//! `jules-testing-merges`. Neither label is configurable.

/// Opens a conflict block.
pub const START_MARKER: &str = "<<<<<<< HEAD";

/// Separates the current side from the incoming side.
pub const SEPARATOR_MARKER: &str = "=======";

/// Closes a conflict block.
pub const END_MARKER: &str = ">>>>>>> jules-testing-merges";
