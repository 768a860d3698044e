//! Provider-neutral text generation request and response.

use serde::{Deserialize, Serialize};

/// A single-prompt text generation request.
///
/// # Examples
///
/// ```
/// use taleforge_core::GenerateRequestBuilder;
///
/// let request = GenerateRequestBuilder::default()
///     .prompt("Write a haiku about rockets")
///     .temperature(1.0_f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt(), "Write a haiku about rockets");
/// assert_eq!(*request.top_k(), None);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// Prompt text
    prompt: String,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Nucleus sampling probability mass
    top_p: Option<f32>,
    /// Top-k sampling cutoff
    top_k: Option<i32>,
    /// Maximum output tokens
    max_output_tokens: Option<i32>,
}

/// Text produced by a model, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text; `None` when the response carried no text
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Wrap generated text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// A response without any text part.
    pub fn empty() -> Self {
        Self { text: None }
    }

    /// Trimmed text, or `fallback` when there is none.
    pub fn trimmed_or(&self, fallback: &str) -> String {
        match self.text.as_deref() {
            Some(text) => text.trim().to_string(),
            None => fallback.to_string(),
        }
    }
}
