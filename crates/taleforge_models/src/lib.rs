//! Provider integrations for Taleforge.
//!
//! - [`TextGenerator`] turns story preferences into prompts and asks a
//!   [`TextDriver`] (Gemini by default, behind the `gemini` feature) for a
//!   title and a story.
//! - [`ImageGenerator`] submits a cover-image job to an [`ImageProvider`]
//!   ([`FalClient`] in production) and polls it until it completes, fails, or
//!   runs out of attempts.
//!
//! Both generators take their collaborators as trait objects so tests can
//! substitute doubles.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use std::sync::Arc;
//! use taleforge_core::PreferenceRequest;
//! use taleforge_models::{GeminiDriver, TextGenerationConfig, TextGenerator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = GeminiDriver::new("api-key", GeminiDriver::DEFAULT_MODEL)?;
//! let generator = TextGenerator::new(Arc::new(driver), TextGenerationConfig::default());
//!
//! let prefs = PreferenceRequest {
//!     group_name: "toddler".into(),
//!     theme_name: "Space".into(),
//!     image_desc: Some("a rocket".into()),
//!     story_desc: None,
//!     user_id: "u1".into(),
//! };
//! let title = generator.generate_title(&prefs).await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod driver;
mod image;
mod text;

#[cfg(feature = "gemini")]
mod gemini;

pub use driver::TextDriver;
pub use image::{
    FalClient, GeneratedImage, ImageArguments, ImageGenerator, ImageOutput, ImageProvider,
    JobState, LogEntry, PollPolicy, QueueStatus,
};
pub use text::{
    NO_STORY_FALLBACK, NO_TITLE_FALLBACK, TextGenerationConfig, TextGenerationConfigBuilder,
    TextGenerator,
};

#[cfg(feature = "gemini")]
pub use gemini::GeminiDriver;
