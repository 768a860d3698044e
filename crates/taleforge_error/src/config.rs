//! Startup configuration errors.

/// A setting the service needs at startup is absent or unusable.
///
/// `setting` names the environment variable or option at fault when there is
/// one; internal builder failures leave it empty.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Offending setting, e.g. `FAL_KEY`
    pub setting: Option<String>,
    /// Caller-facing message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Free-form configuration error not tied to a single setting.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::build(None, message.into())
    }

    /// A required setting is not present.
    ///
    /// ```
    /// use taleforge_error::ConfigError;
    ///
    /// let err = ConfigError::missing("FAL_KEY");
    /// assert_eq!(err.setting.as_deref(), Some("FAL_KEY"));
    /// assert_eq!(err.message, "FAL_KEY not set");
    /// ```
    #[track_caller]
    pub fn missing(setting: &str) -> Self {
        Self::build(Some(setting), format!("{} not set", setting))
    }

    /// A setting is present but its value cannot be used.
    #[track_caller]
    pub fn invalid(setting: &str, reason: impl std::fmt::Display) -> Self {
        Self::build(Some(setting), format!("Invalid {}: {}", setting, reason))
    }

    #[track_caller]
    fn build(setting: Option<&str>, message: String) -> Self {
        let location = std::panic::Location::caller();
        Self {
            setting: setting.map(str::to_string),
            message,
            line: location.line(),
            file: location.file(),
        }
    }
}
