//! Logging initialization
//!
//! The clock owns the terminal while it runs, so log records can only go to
//! a file. Without a log file no subscriber is installed and `tracing`
//! macros are no-ops.

use crate::error::ClockError;
use std::fs::OpenOptions;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs a file-backed subscriber
///
/// # Returns
/// * `Some(WorkerGuard)` - Must be kept alive until exit so buffered
///   records are flushed
/// * `None` - No log file requested
pub fn init_logging(log_file: Option<&Path>, level: &str) -> Result<Option<WorkerGuard>, ClockError> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ClockError::Logging(format!("{}: {}", path.display(), e)))?;

    let filter = EnvFilter::try_new(level)
        .map_err(|e| ClockError::Logging(format!("invalid log level '{}': {}", level, e)))?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(false)
        .try_init()
        .map_err(|e| ClockError::Logging(e.to_string()))?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_means_no_subscriber() {
        assert!(init_logging(None, "info").unwrap().is_none());
    }

    #[test]
    fn unwritable_path_is_reported() {
        let path = Path::new("/nonexistent-dir-for-clockface/clock.log");
        assert!(matches!(
            init_logging(Some(path), "info"),
            Err(ClockError::Logging(_))
        ));
    }
}
