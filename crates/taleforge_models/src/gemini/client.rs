//! Google Gemini REST client wrapped as a [`TextDriver`].

use async_trait::async_trait;
use gemini_rust::{Gemini, client::Model};
use tracing::{debug, instrument};

use taleforge_core::{GenerateRequest, GenerateResponse};
use taleforge_error::{GeminiError, GeminiErrorKind, TaleforgeResult};

use crate::TextDriver;

/// Gemini client bound to a single model.
pub struct GeminiDriver {
    client: Gemini,
    model_name: String,
}

impl std::fmt::Debug for GeminiDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiDriver")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiDriver {
    /// Model used when none is configured.
    pub const DEFAULT_MODEL: &'static str = "gemini-1.5-flash-latest";

    /// Create a driver for `model_name` authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the SDK client cannot be built.
    #[instrument(name = "gemini_driver_new", skip_all, fields(model = %model_name.as_ref()))]
    pub fn new(api_key: &str, model_name: impl AsRef<str>) -> TaleforgeResult<Self> {
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into());
        }

        let model_name = model_name.as_ref().to_string();
        let client = Gemini::with_model(api_key, Self::model_name_to_enum(&model_name))
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self { client, model_name })
    }

    /// Map a model name to the SDK enum, adding the `models/` prefix the API
    /// expects for names the SDK does not know.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other if other.starts_with("models/") => Model::Custom(other.to_string()),
            other => Model::Custom(format!("models/{}", other)),
        }
    }
}

#[async_trait]
impl TextDriver for GeminiDriver {
    #[instrument(skip(self, req), fields(model = %self.model_name))]
    async fn generate(&self, req: &GenerateRequest) -> TaleforgeResult<GenerateResponse> {
        let mut builder = self.client.generate_content().with_user_message(req.prompt());

        if let Some(temperature) = req.temperature() {
            builder = builder.with_temperature(*temperature);
        }
        if let Some(top_p) = req.top_p() {
            builder = builder.with_top_p(*top_p);
        }
        if let Some(top_k) = req.top_k() {
            builder = builder.with_top_k(*top_k);
        }
        if let Some(max_tokens) = req.max_output_tokens() {
            builder = builder.with_max_output_tokens(*max_tokens);
        }

        let response = builder
            .execute()
            .await
            .map_err(|e| GeminiError::from_sdk_message(e.to_string()))?;

        // The SDK yields an empty string when no candidate carries a text part.
        let text = response.text();
        debug!(chars = text.len(), "Gemini response received");
        if text.trim().is_empty() {
            Ok(GenerateResponse::empty())
        } else {
            Ok(GenerateResponse::text(text))
        }
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
