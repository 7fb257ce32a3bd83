//! Backend error types.

use derive_more::{Display, Error};

/// Backend error with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Backend error: {} at {}:{}", message, file, line)]
pub struct BackendError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BackendError {
    /// Creates a new backend error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for BackendError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("Request error: {}", err))
    }
}
