//! Logging setup
//!
//! The terminal belongs to the UI while it runs, so log output goes to a
//! file. The default file sits next to the executable and is truncated on
//! every start. Filtering follows `RUST_LOG`, falling back to `info`.

use crate::{Result, SearchBoxError};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Name of the default log file
pub const LOG_FILE_NAME: &str = "searchbox.log";

/// Default directive when `RUST_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "info";

/// Get the default log file path (same directory as executable)
pub fn default_log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE_NAME)
}

/// Install the global subscriber writing to `path`.
///
/// Fails if the file cannot be opened or a subscriber is already set.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Start fresh each run
        .open(path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| SearchBoxError::Logging(e.to_string()))
}
