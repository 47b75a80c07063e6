//! Application logging functionality
//!
//! Handles log file management and subscriber setup. While the terminal
//! interface owns the screen, log lines go to a daily file under
//! ~/.config/notoconf/logs/; otherwise they go to stderr.

use crate::core::config_file::ConfigFile;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "info";

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<PathBuf> {
    let logs_dir = logs_dir();
    fs::create_dir_all(&logs_dir)?;
    Ok(logs_dir)
}

/// `RUST_LOG` wins over the configured level
fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_LEVEL)))
}

/// Log to stderr
pub fn init_stderr(level: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to a daily-rolling file; keep the guard alive until exit so
/// buffered lines get flushed
pub fn init_file(level: Option<&str>) -> anyhow::Result<WorkerGuard> {
    let logs_dir = initialize_logs_directory()?;
    let appender = tracing_appender::rolling::daily(&logs_dir, "notoconf.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;
    tracing::info!("=== notoconf started, logging to {:?} ===", logs_dir);
    Ok(guard)
}
