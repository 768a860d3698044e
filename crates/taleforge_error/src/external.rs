//! Errors reported by the providers this service depends on.

/// The upstream collaborator a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExternalService {
    /// Text-generation provider
    #[display("text model")]
    TextModel,
    /// Image-generation provider
    #[display("image model")]
    ImageModel,
    /// Story storage backend
    #[display("storage API")]
    Storage,
}

/// An external provider returned a malformed or error response, or could not
/// be reached at all.
///
/// # Examples
///
/// ```
/// use taleforge_error::{ExternalService, ExternalServiceError};
///
/// let err = ExternalServiceError::new(ExternalService::Storage, 503, "down for maintenance");
/// assert_eq!(err.relayed_status(), 503);
///
/// let err = ExternalServiceError::new(ExternalService::ImageModel, 401, "bad key");
/// assert_eq!(err.relayed_status(), 500);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "External Service Error: {} returned {}: {} at line {} in {}",
    service,
    status,
    message,
    line,
    file
)]
pub struct ExternalServiceError {
    /// Which provider failed
    pub service: ExternalService,
    /// Upstream HTTP status, or 500 for transport failures
    pub status: u16,
    /// Upstream body text or transport message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ExternalServiceError {
    /// Create a new ExternalServiceError at the current location.
    #[track_caller]
    pub fn new(service: ExternalService, status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            service,
            status,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Wrap a network-level failure (connection refused, DNS, ...) as a 500.
    #[track_caller]
    pub fn transport(service: ExternalService, message: impl Into<String>) -> Self {
        Self::new(service, 500, message)
    }

    /// Status code this error surfaces as to HTTP callers.
    ///
    /// Storage failures relay the upstream status; everything else is a 500.
    /// A storage "failure" carrying a non-error status (for example a 200 with a
    /// non-JSON body) is reported as 502.
    pub fn relayed_status(&self) -> u16 {
        match self.service {
            ExternalService::Storage if (400..=599).contains(&self.status) => self.status,
            ExternalService::Storage => 502,
            ExternalService::TextModel | ExternalService::ImageModel => 500,
        }
    }
}
