//! File logging.

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, writing to `path`.
///
/// Logs go to a file so output does not interfere with the TUI. The level
/// comes from `RUST_LOG`, `info` by default.
///
/// # Errors
///
/// Fails if the file cannot be created or a global subscriber is already set.
pub fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}
