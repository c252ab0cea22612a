//! Diagnostic logging setup
//!
//! The TUI owns the terminal, so in that mode events go to a log file in the
//! config directory. Replay runs log to stderr, keeping stdout for results.
//! `RUST_LOG` overrides the configured level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{WalletError, WalletResult};

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sonova_wallet={level},sonova={level}")))
}

/// Send log events to `path`, appending
pub fn init_file(path: &Path, level: &str) -> WalletResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| WalletError::Io(format!("Failed to open log file {}: {}", path.display(), e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| WalletError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Send log events to stderr
pub fn init_stderr(level: &str) -> WalletResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| WalletError::Config(format!("Failed to initialize logging: {}", e)))
}
