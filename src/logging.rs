//! Logging via `tracing`.
//!
//! The terminal belongs to the UI, so events only go to a file. Without
//! `--log-file` no subscriber is installed and events are dropped.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid log level {0:?}")]
    Level(String),
    #[error("logging already initialized")]
    AlreadyInit,
}

/// Build the filter from a level or directive string such as `debug` or
/// `listboard=trace`.
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level).map_err(|_| LoggingError::Level(level.to_string()))
}

/// Send `tracing` events to `path` (appending) at `level`.
pub fn init_file_logging(path: &Path, level: &str) -> Result<(), LoggingError> {
    let filter = build_filter(level)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.display().to_string(),
            source,
        })?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInit)
}
