//! Top-level error wrapper types.

use crate::{ConfigError, ExternalServiceError, GeminiError, TimeoutError, ValidationError};

/// Every failure the service can surface.
///
/// # Examples
///
/// ```
/// use taleforge_error::{TaleforgeError, ValidationError};
///
/// let err: TaleforgeError = ValidationError::new("image required").into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TaleforgeErrorKind {
    /// Caller supplied unusable input
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Provider or storage backend failure
    #[from(ExternalServiceError)]
    ExternalService(ExternalServiceError),
    /// Image polling exhausted its attempts
    #[from(TimeoutError)]
    Timeout(TimeoutError),
    /// Text provider failure
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Taleforge error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Taleforge Error: {}", _0)]
pub struct TaleforgeError(Box<TaleforgeErrorKind>);

impl TaleforgeError {
    /// Create a new error from a kind.
    pub fn new(kind: TaleforgeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TaleforgeErrorKind {
        &self.0
    }

    /// HTTP status this error surfaces as.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            TaleforgeErrorKind::Validation(_) => 400,
            TaleforgeErrorKind::ExternalService(e) => e.relayed_status(),
            TaleforgeErrorKind::Timeout(_)
            | TaleforgeErrorKind::Gemini(_)
            | TaleforgeErrorKind::Config(_) => 500,
        }
    }

    /// Caller-facing message, without source locations.
    pub fn detail(&self) -> String {
        match self.kind() {
            TaleforgeErrorKind::Validation(e) => e.message.clone(),
            TaleforgeErrorKind::ExternalService(e) => {
                format!("Error from {}: {}", e.service, e.message)
            }
            TaleforgeErrorKind::Timeout(e) => format!(
                "Timeout waiting for {} after {} attempts",
                e.operation, e.attempts
            ),
            TaleforgeErrorKind::Gemini(e) => format!("Text generation failed: {}", e.kind),
            TaleforgeErrorKind::Config(e) => e.message.clone(),
        }
    }
}

impl<T> From<T> for TaleforgeError
where
    T: Into<TaleforgeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Taleforge operations.
pub type TaleforgeResult<T> = std::result::Result<T, TaleforgeError>;
