//! Logging system initialization
//!
//! Sets up tracing-based logging on stderr, keeping stdout clean for the
//! final snapshot JSON. When `KNOBDEMO_LOG_DIR` names a directory, output
//! goes to knobdemo.log there instead, with automatic rotation on startup
//! keeping 10 historical files.

use crate::error::{KnobDemoError, Result, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable naming the log output directory
pub const LOG_DIR_ENV: &str = "KNOBDEMO_LOG_DIR";

/// Current log file name inside the log directory
const LOG_FILE_NAME: &str = "knobdemo.log";

/// Maximum number of historical log files to keep (knobdemo.log.1 through
/// knobdemo.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via the `RUST_LOG`
/// environment variable. With `KNOBDEMO_LOG_DIR` set, existing logs are
/// rotated on startup so each session's output lands in its own file.
pub fn init_logging() -> Result<()> {
    match std::env::var(LOG_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => init_file_logging(Path::new(&dir))?,
        _ => init_stderr_logging()?,
    }

    tracing::info!("knobdemo v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

fn default_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_logging() -> Result<()> {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(default_env_filter())
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| KnobDemoError::ConfigError(Box::new(e)))?;

    Ok(())
}

fn init_file_logging(log_dir: &Path) -> Result<()> {
    if log_dir.exists() && !log_dir.is_dir() {
        return Err(KnobDemoError::ConfigError(StringError::new(format!(
            "{} is not a directory; {LOG_DIR_ENV} must name one",
            log_dir.display()
        ))));
    }

    std::fs::create_dir_all(log_dir)?;

    rotate_logs_on_startup(log_dir)?;

    // tracing_appender's RollingFileAppender doesn't support startup-based
    // rotation with this retention policy, so rotation is handled manually
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("knobdemo")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| KnobDemoError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(default_env_filter())
        .with_ansi(false) // Disable ANSI colors for file output
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| KnobDemoError::ConfigError(Box::new(e)))?;

    Ok(())
}

/// Rotate log files on startup
///
/// Maintains a history of the last 10 sessions:
/// - knobdemo.log.9 is deleted (oldest)
/// - knobdemo.log.8 -> knobdemo.log.9, down to knobdemo.log.1 -> knobdemo.log.2
/// - knobdemo.log -> knobdemo.log.1
/// - A fresh knobdemo.log is created by the logger
fn rotate_logs_on_startup(log_dir: &Path) -> Result<()> {
    let log_path = log_dir.join(LOG_FILE_NAME);
    if !log_path.exists() {
        return Ok(());
    }

    let oldest_log = log_dir.join(format!("{LOG_FILE_NAME}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{LOG_FILE_NAME}.{i}"));
        let next_log = log_dir.join(format!("{LOG_FILE_NAME}.{}", i + 1));

        if current_log.exists() {
            std::fs::rename(&current_log, &next_log)?;
        }
    }

    std::fs::rename(&log_path, log_dir.join(format!("{LOG_FILE_NAME}.1")))?;

    Ok(())
}
