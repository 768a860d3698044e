//! fal.ai queue API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use taleforge_error::{ConfigError, ExternalService, ExternalServiceError, TaleforgeResult};
use tracing::{debug, instrument};

use super::{ImageArguments, ImageOutput, ImageProvider, QueueStatus};

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    request_id: Option<String>,
}

/// Client for the fal.ai asynchronous queue.
///
/// Jobs are submitted to `{base_url}/{model}`; status and results live under
/// the application id (the first two path segments of the model), e.g.
/// `fal-ai/flux/dev` polls `{base_url}/fal-ai/flux/requests/{id}/status`.
#[derive(Clone)]
pub struct FalClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for FalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FalClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl FalClient {
    /// Production queue endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://queue.fal.run";

    /// Model used when none is configured.
    pub const DEFAULT_MODEL: &'static str = "fal-ai/flux/dev";

    /// Create a client for `model`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is blank.
    #[instrument(skip_all)]
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> TaleforgeResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::invalid("FAL_KEY", "value is empty").into());
        }

        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        })
    }

    /// Point the client at a different queue host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn app_id(&self) -> String {
        self.model.split('/').take(2).collect::<Vec<_>>().join("/")
    }

    fn request_url(&self, request_id: &str) -> String {
        format!("{}/{}/requests/{}", self.base_url, self.app_id(), request_id)
    }

    fn error(status: u16, message: impl Into<String>) -> ExternalServiceError {
        ExternalServiceError::new(ExternalService::ImageModel, status, message)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> TaleforgeResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ExternalServiceError::transport(ExternalService::ImageModel, e.to_string()))?;

        if !status.is_success() {
            return Err(Self::error(status.as_u16(), body).into());
        }

        serde_json::from_str(&body).map_err(|e| {
            Self::error(500, format!("Failed to parse fal response: {}", e)).into()
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> TaleforgeResult<T> {
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Key {}", self.api_key))
            .send()
            .await
            .map_err(|e| ExternalServiceError::transport(ExternalService::ImageModel, e.to_string()))?;
        Self::read_json(response).await
    }
}

#[async_trait]
impl ImageProvider for FalClient {
    #[instrument(skip(self, arguments), fields(model = %self.model))]
    async fn submit(&self, arguments: &ImageArguments) -> TaleforgeResult<Option<String>> {
        let url = format!("{}/{}", self.base_url, self.model);
        debug!(url = %url, "Submitting image job");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Key {}", self.api_key))
            .json(arguments)
            .send()
            .await
            .map_err(|e| ExternalServiceError::transport(ExternalService::ImageModel, e.to_string()))?;

        let submitted: SubmitResponse = Self::read_json(response).await?;
        Ok(submitted.request_id)
    }

    #[instrument(skip(self))]
    async fn status(&self, request_id: &str) -> TaleforgeResult<QueueStatus> {
        let url = format!("{}/status?logs=1", self.request_url(request_id));
        self.get_json(&url).await
    }

    #[instrument(skip(self))]
    async fn result(&self, request_id: &str) -> TaleforgeResult<ImageOutput> {
        let url = self.request_url(request_id);
        self.get_json(&url).await
    }

    fn provider_name(&self) -> &'static str {
        "fal"
    }
}
