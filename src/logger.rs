//! File-backed `tracing` setup for the CLI binary.

use std::path::Path;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt};

// Holding the worker guard for the process lifetime keeps the non-blocking
// writer flushing; a successful `set` also marks logging as installed.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Route `tracing` output to an append-only file, e.g.
/// `init_logging("logs/engine.log", "gyoku=info")`. `RUST_LOG` overrides
/// `default_filter`. Later calls are no-ops once a subscriber is installed.
pub fn init_logging(path: impl AsRef<Path>, default_filter: &str) -> Result<(), String> {
    let path = path.as_ref();
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let file_name = path
        .file_name()
        .ok_or_else(|| format!("log path {} has no file name", path.display()))?;

    let dir = dir.unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(|e| format!("create log directory: {e}"))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    if LOG_GUARD.set(guard).is_err() {
        return Ok(());
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| format!("bad log filter {default_filter:?}: {e}"))?,
    };

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .compact()
        .with_writer(writer)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("install log subscriber: {e}"))
}
