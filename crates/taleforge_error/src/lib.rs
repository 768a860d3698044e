//! Error types for the Taleforge service.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind (or message) with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! [`TaleforgeError`] is the umbrella type every crate returns. It knows which
//! HTTP status each failure surfaces as, see [`TaleforgeError::status_code`].
//!
//! # Examples
//!
//! ```
//! use taleforge_error::{TaleforgeResult, ValidationError};
//!
//! fn check_theme(theme: &str) -> TaleforgeResult<()> {
//!     if theme.trim().is_empty() {
//!         Err(ValidationError::new("themeName is required"))?
//!     }
//!     Ok(())
//! }
//!
//! let err = check_theme(" ").unwrap_err();
//! assert_eq!(err.status_code(), 400);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod external;
mod gemini;
mod timeout;
mod validation;

pub use config::ConfigError;
pub use error::{TaleforgeError, TaleforgeErrorKind, TaleforgeResult};
pub use external::{ExternalService, ExternalServiceError};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use timeout::TimeoutError;
pub use validation::ValidationError;
