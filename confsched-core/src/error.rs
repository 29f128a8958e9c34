//! Error types for confsched.

use thiserror::Error;

/// Errors that can occur while loading schedules or managing favorites.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("No embedded schedule data found in page")]
    ExtractionEmpty,

    #[error("Could not decode schedule: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preferences error: {0}")]
    Preferences(String),

    #[error("Conference not found: {0}")]
    ConferenceNotFound(String),

    #[error("No talk at day {day}, row {row}")]
    RowOutOfRange { day: usize, row: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ScheduleError {
    fn from(err: serde_json::Error) -> Self {
        ScheduleError::Decode(err.to_string())
    }
}

/// Result type alias for confsched operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
