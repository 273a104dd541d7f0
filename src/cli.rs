//! Command line and logging setup.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::types::DEFAULT_SEED;

/// Falling colored words in the terminal. Press any key to stop.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "word-rain", version)]
pub struct Args {
    /// Newline-delimited word list, one phrase per line (built-in phrases if
    /// omitted or unreadable)
    #[arg(value_name = "WORDS")]
    pub words: Option<PathBuf>,

    /// RNG seed; the same seed gives the same rain
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Install a file logger if `path` is given.
///
/// The terminal itself is busy with the animation, so logs never go to
/// stdout or stderr.
pub fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("cannot install logger: {e}"))?;
    Ok(())
}
