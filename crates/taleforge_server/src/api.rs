//! HTTP surface.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use taleforge_core::{PreferenceRequest, StoryResponse};
use taleforge_error::{ConfigError, TaleforgeError, TaleforgeResult};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, warn};

use crate::StoryHandler;

/// Shared state for the HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    handler: Arc<StoryHandler>,
}

impl AppState {
    /// Wrap a story handler for sharing across requests.
    pub fn new(handler: StoryHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}

/// A [`TaleforgeError`] rendered as `{"detail": ...}` with its mapped status.
#[derive(Debug)]
pub struct ApiError(pub TaleforgeError);

impl From<TaleforgeError> for ApiError {
    fn from(err: TaleforgeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.0, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self.0, "Request rejected");
        }
        (status, Json(json!({ "detail": self.0.detail() }))).into_response()
    }
}

/// Build the router.
///
/// Routes:
/// - `POST /api/generate-story`
/// - `GET /health`
///
/// # Errors
///
/// Returns `ConfigError` if `cors_origin` is not a valid header value.
pub fn create_router(state: AppState, cors_origin: &str) -> TaleforgeResult<Router> {
    let origin = HeaderValue::from_str(cors_origin)
        .map_err(|e| ConfigError::invalid("CORS_ORIGIN", format!("'{}' ({})", cors_origin, e)))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Ok(Router::new()
        .route("/api/generate-story", post(generate_story))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

async fn generate_story(
    State(state): State<AppState>,
    Json(prefs): Json<PreferenceRequest>,
) -> Result<Json<StoryResponse>, ApiError> {
    let response = state.handler.generate(&prefs).await?;
    Ok(Json(response))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
