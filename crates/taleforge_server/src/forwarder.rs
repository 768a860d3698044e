//! Forwarding finished stories to the storage backend.

use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use taleforge_core::StoryRecord;
use taleforge_error::{ExternalService, ExternalServiceError, TaleforgeResult};
use tracing::{error, info, instrument};

/// Sends story records to the storage API and relays its answer.
#[derive(Debug, Clone, Default)]
pub struct StoryForwarder {
    client: Client,
}

impl StoryForwarder {
    /// Create a forwarder with its own HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forwarder sharing an existing HTTP client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// POST `record` as JSON to `endpoint_url`.
    ///
    /// Only a `200` with a JSON content type counts as success; its body is
    /// returned untouched.
    ///
    /// # Errors
    ///
    /// - `ExternalServiceError` with the upstream status and body text for any
    ///   other response
    /// - `ExternalServiceError` with status 500 when the backend is unreachable
    #[instrument(skip(self, record), fields(user_id = %record.user_id()))]
    pub async fn forward(
        &self,
        record: &StoryRecord,
        endpoint_url: &str,
    ) -> TaleforgeResult<serde_json::Value> {
        let response = self
            .client
            .post(endpoint_url)
            .header(CONTENT_TYPE, "application/json")
            .json(record)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to communicate with storage API: {}", e);
                ExternalServiceError::transport(
                    ExternalService::Storage,
                    format!("Failed to communicate with storage API: {}", e),
                )
            })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text().await.map_err(|e| {
            ExternalServiceError::transport(
                ExternalService::Storage,
                format!("Failed to read storage API response: {}", e),
            )
        })?;

        info!(status = status.as_u16(), body = %body, "Storage API responded");

        if status == StatusCode::OK && content_type.contains("application/json") {
            return serde_json::from_str(&body).map_err(|e| {
                ExternalServiceError::new(
                    ExternalService::Storage,
                    StatusCode::BAD_GATEWAY.as_u16(),
                    format!("Invalid JSON from storage API: {}", e),
                )
                .into()
            });
        }

        error!(status = status.as_u16(), body = %body, "Error from storage API");
        Err(ExternalServiceError::new(ExternalService::Storage, status.as_u16(), body).into())
    }
}
