//! Trait definitions for text-generation backends.

use async_trait::async_trait;
use taleforge_core::{GenerateRequest, GenerateResponse};
use taleforge_error::TaleforgeResult;

/// Core trait that text-generation backends implement.
#[async_trait]
pub trait TextDriver: Send + Sync {
    /// Generate text for a single prompt.
    async fn generate(&self, req: &GenerateRequest) -> TaleforgeResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-1.5-flash-latest").
    fn model_name(&self) -> &str;
}
