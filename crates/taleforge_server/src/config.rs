//! Service configuration.

use taleforge_error::{ConfigError, TaleforgeResult};
use taleforge_models::{FalClient, GeminiDriver};

/// Storage backend used when `STORAGE_API_URL` is not set.
pub const DEFAULT_STORAGE_URL: &str = "http://localhost:5044";

/// The single origin allowed by CORS when `CORS_ORIGIN` is not set.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5044";

/// Everything the service needs to reach its providers.
///
/// Components receive the pieces they need through their constructors; nothing
/// reads the environment after startup.
///
/// # Examples
///
/// ```
/// use taleforge_server::ServiceConfigBuilder;
///
/// let config = ServiceConfigBuilder::default()
///     .gemini_api_key("gemini-key")
///     .fal_key("fal-key")
///     .storage_base_url("http://storage:5044/")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.storage_endpoint(), "http://storage:5044/api/Story/create-story");
/// assert_eq!(config.cors_origin(), "http://localhost:5044");
/// ```
#[derive(Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct ServiceConfig {
    /// Gemini API key
    gemini_api_key: String,
    /// fal.ai API key
    fal_key: String,
    /// Base URL of the storage backend
    #[builder(default = "DEFAULT_STORAGE_URL.to_string()")]
    storage_base_url: String,
    /// Origin allowed to call the API from a browser
    #[builder(default = "DEFAULT_CORS_ORIGIN.to_string()")]
    cors_origin: String,
    /// Gemini model name
    #[builder(default = "GeminiDriver::DEFAULT_MODEL.to_string()")]
    gemini_model: String,
    /// fal.ai model id
    #[builder(default = "FalClient::DEFAULT_MODEL.to_string()")]
    fal_model: String,
    /// fal.ai queue host
    #[builder(default = "FalClient::DEFAULT_BASE_URL.to_string()")]
    fal_base_url: String,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("storage_base_url", &self.storage_base_url)
            .field("cors_origin", &self.cors_origin)
            .field("gemini_model", &self.gemini_model)
            .field("fal_model", &self.fal_model)
            .field("fal_base_url", &self.fal_base_url)
            .finish_non_exhaustive()
    }
}

impl ServiceConfig {
    /// Path on the storage backend that creates a story.
    pub const STORE_PATH: &'static str = "/api/Story/create-story";

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `GEMINI_API_KEY` (required; `API_KEY` is accepted as a fallback)
    /// - `FAL_KEY` (required)
    /// - `STORAGE_API_URL` (default: "http://localhost:5044")
    /// - `CORS_ORIGIN` (default: "http://localhost:5044")
    /// - `GEMINI_MODEL`, `FAL_MODEL`, `FAL_BASE_URL` (optional overrides)
    pub fn from_env() -> TaleforgeResult<Self> {
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| ConfigError::missing("GEMINI_API_KEY"))?;
        let fal_key =
            std::env::var("FAL_KEY").map_err(|_| ConfigError::missing("FAL_KEY"))?;

        let mut builder = ServiceConfigBuilder::default();
        builder.gemini_api_key(gemini_api_key).fal_key(fal_key);

        if let Ok(url) = std::env::var("STORAGE_API_URL") {
            builder.storage_base_url(url);
        }
        if let Ok(origin) = std::env::var("CORS_ORIGIN") {
            builder.cors_origin(origin);
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            builder.gemini_model(model);
        }
        if let Ok(model) = std::env::var("FAL_MODEL") {
            builder.fal_model(model);
        }
        if let Ok(url) = std::env::var("FAL_BASE_URL") {
            builder.fal_base_url(url);
        }

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)).into())
    }

    /// Full URL stories are forwarded to.
    pub fn storage_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.storage_base_url.trim_end_matches('/'),
            Self::STORE_PATH
        )
    }
}
