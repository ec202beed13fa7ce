//! File-backed tracing.
//!
//! The TUI owns the terminal, so diagnostics go to a log file in the
//! platform cache directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter.
pub const ENV_LOG: &str = "DEVSIM_LOG";

const LOG_DIR: &str = "devsim";
const LOG_FILE: &str = "devsim.log";

/// `<cache dir>/devsim/devsim.log`, if the platform has a cache directory.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(LOG_DIR).join(LOG_FILE))
}

/// Filter from `DEVSIM_LOG`, defaulting to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to [`log_file_path`].
///
/// Returns the path written to. When the file cannot be opened tracing
/// stays uninitialised and `None` is returned.
pub fn init_logging() -> Option<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .ok()?;

    Some(path)
}
