//! Console and rolling JSON file output
//!
//! Events are filtered to the `wordmask` target at the configured level
//! unless `RUST_LOG` says otherwise. The file layer is optional and writes
//! through a non-blocking worker, so the returned guard must outlive the
//! last event worth keeping.

use crate::config::LoggingConfig;
use crate::domain::{MaskError, Result};
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "wordmask.log";

/// Flushes the file writer when dropped
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber
///
/// # Errors
///
/// [`MaskError::Configuration`] if `level` is not a tracing level, the log
/// directory cannot be created, or a global subscriber is already set.
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(level)?;
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("wordmask={level}")))
    };

    let (file_writer, file_guard) = if config.local_enabled {
        let (writer, guard) = file_writer(Path::new(&config.local_path), &config.local_rotation)?;
        (Some(writer), Some(guard))
    } else {
        (None, None)
    };

    let console = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(filter());
    let file = file_writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_thread_ids(true)
            .with_writer(writer)
            .with_filter(filter())
    });

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| MaskError::Configuration(format!("Logging already initialized: {e}")))?;

    tracing::debug!(%level, file = config.local_enabled, "Logging ready");
    Ok(LoggingGuard { _file: file_guard })
}

fn file_writer(dir: &Path, rotation: &str) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir).map_err(|e| {
        MaskError::Configuration(format!("Cannot create log directory {}: {e}", dir.display()))
    })?;
    let appender = RollingFileAppender::new(parse_rotation(rotation), dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}

// `Level::from_str` also takes "1".."5"; only names are accepted here.
fn parse_log_level(name: &str) -> Result<Level> {
    let level = match name.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => return Err(MaskError::Configuration(format!("Unknown log level '{name}'"))),
    };
    Ok(level)
}

fn parse_rotation(name: &str) -> Rotation {
    match name {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
