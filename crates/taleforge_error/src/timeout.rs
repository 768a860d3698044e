//! Polling timeout errors.

use std::time::Duration;

/// A bounded polling loop ran out of attempts.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Timeout waiting for {} after {} attempts ({:?}) at line {} in {}",
    operation,
    attempts,
    waited,
    line,
    file
)]
pub struct TimeoutError {
    /// What was being waited on
    pub operation: String,
    /// Number of attempts made before giving up
    pub attempts: u32,
    /// Total time spent sleeping between attempts
    pub waited: Duration,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TimeoutError {
    /// Create a new TimeoutError at the current location.
    #[track_caller]
    pub fn new(operation: impl Into<String>, attempts: u32, waited: Duration) -> Self {
        let location = std::panic::Location::caller();
        Self {
            operation: operation.into(),
            attempts,
            waited,
            line: location.line(),
            file: location.file(),
        }
    }
}
