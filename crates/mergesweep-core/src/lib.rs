// Rust guideline compliant 2026-02-06

//! Mergesweep Core Library
//!
//! This crate provides the building blocks for sweeping unresolved merge
//! conflicts out of a source tree:
//! - Conflict marker literals
//! - Scanner (directory walk, path filter, marker detection)
//! - Resolver (block matching and in-place rewrite)
//! - Sweep orchestration and progress output
//! - Error types and configuration

pub mod config;
pub mod error;
pub mod markers;
pub mod resolver;
pub mod scanner;
pub mod sweep;

pub use config::Config;
pub use error::{Error, Result};
pub use resolver::{Resolution, Resolver};
pub use scanner::scan;
pub use sweep::{sweep, SweepSummary};
