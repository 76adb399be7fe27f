// Rust guideline compliant 2026-02-06

//! Mergesweep
//!
//! Resolves leftover `HEAD` / `jules-testing-merges` conflict blocks in
//! TypeScript sources under `client` and `server` directories by keeping the
//! incoming side.

use anyhow::Context;
use clap::Parser;
use mergesweep_cli::init_tracing;
use mergesweep_core::{sweep, Config};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mergesweep",
    version,
    about = "Resolve leftover merge conflicts by keeping the incoming side",
    after_help = "Examples:\n  mergesweep\n  mergesweep ./app --log-level info\n"
)]
struct Cli {
    /// Directory to sweep
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Log level for stderr diagnostics (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    sweep(&cli.root, &Config::default(), &mut out)
        .with_context(|| format!("Failed to sweep {}", cli.root.display()))?;

    Ok(())
}
