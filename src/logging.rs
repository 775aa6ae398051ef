//! Log file setup

use std::path::Path;

use anyhow::{Context, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `mc_version_catalog=trace`)
pub const LOG_ENV: &str = "MC_VERSIONS_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install a JSON-lines subscriber writing to `log_path`.
///
/// The returned guard flushes pending records when dropped and must be kept
/// alive for the lifetime of the program.
pub fn init(log_path: &Path) -> anyhow::Result<WorkerGuard> {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {:?}", dir))?;
    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow!("log path {:?} has no file name", log_path))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(std::env::var(LOG_ENV).ok()))
        .with_writer(writer)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;

    Ok(guard)
}

fn env_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
