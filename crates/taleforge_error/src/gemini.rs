//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key missing from configuration
    #[display("Gemini API key not configured")]
    MissingApiKey,
    /// Failed to create Gemini client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// API request failed without a recognizable status code
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use taleforge_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("API key"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Parse an SDK error message, pulling out an HTTP status when present.
    ///
    /// Messages look like `"bad response from server; code 503; description: ..."`.
    #[track_caller]
    pub fn from_sdk_message(message: impl Into<String>) -> Self {
        let message = message.into();
        match extract_status_code(&message) {
            Some(status_code) => Self::new(GeminiErrorKind::HttpError {
                status_code,
                message,
            }),
            None => Self::new(GeminiErrorKind::ApiRequest(message)),
        }
    }
}

fn extract_status_code(error_msg: &str) -> Option<u16> {
    let code_start = error_msg.find("code ")?;
    let code_str = &error_msg[code_start + 5..];
    let end = code_str
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(code_str.len());
    code_str[..end].parse().ok()
}
