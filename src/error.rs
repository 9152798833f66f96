use std::io;

/// Errors surfaced by the clock
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid start time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Terminal too small: {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },

    #[error("Failed to set up logging: {0}")]
    Logging(String),
}
