//! Record error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Recording error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Record error: {} at {}:{}", message, file, line)]
pub struct RecordError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RecordError {
    /// Creates a new record error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for RecordError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Serialization error: {}", err))
    }
}
