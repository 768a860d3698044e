//! Title and story generation.

use std::sync::Arc;

use taleforge_core::{AgeGroup, GenerateRequestBuilder, PreferenceRequest};
use taleforge_error::{ConfigError, TaleforgeResult};
use tracing::{debug, instrument};

use crate::TextDriver;

/// Returned when the model produced no title text.
pub const NO_TITLE_FALLBACK: &str = "No title generated";

/// Returned when the model produced no story text.
pub const NO_STORY_FALLBACK: &str = "No story generated";

/// Sampling parameters sent with every text request.
///
/// # Examples
///
/// ```
/// use taleforge_models::TextGenerationConfig;
///
/// let config = TextGenerationConfig::default();
/// assert_eq!(*config.top_k(), 64);
/// assert_eq!(*config.max_output_tokens(), 8192);
/// ```
#[derive(Debug, Clone, PartialEq, derive_builder::Builder, derive_getters::Getters)]
#[builder(default)]
pub struct TextGenerationConfig {
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling probability mass
    top_p: f32,
    /// Top-k sampling cutoff
    top_k: i32,
    /// Maximum output tokens
    max_output_tokens: i32,
}

impl Default for TextGenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 8192,
        }
    }
}

/// Generates titles and stories from story preferences.
#[derive(Clone)]
pub struct TextGenerator {
    driver: Arc<dyn TextDriver>,
    config: TextGenerationConfig,
}

impl std::fmt::Debug for TextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextGenerator")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .field("config", &self.config)
            .finish()
    }
}

impl TextGenerator {
    /// Create a generator over `driver`.
    pub fn new(driver: Arc<dyn TextDriver>, config: TextGenerationConfig) -> Self {
        Self { driver, config }
    }

    /// Prompt asking for a single title.
    pub fn title_prompt(prefs: &PreferenceRequest) -> String {
        let description = prefs.active_description().unwrap_or_default();
        match prefs.age_group() {
            AgeGroup::Toddler => format!(
                "Generate one fun title for a toddler story about the theme '{}'. Description: {}",
                prefs.theme_name, description
            ),
            AgeGroup::Kid => format!(
                "Generate one engaging title for a kids' story on the theme '{}'. Description: {}",
                prefs.theme_name, description
            ),
        }
    }

    /// Prompt asking for a story of roughly `max_words` words.
    ///
    /// The word count is an instruction to the model, nothing enforces it.
    pub fn story_prompt(prefs: &PreferenceRequest, max_words: u32) -> String {
        format!(
            "Write a story for a {} about '{}' in {} words. Description: {}.",
            prefs.group_name.to_lowercase(),
            prefs.theme_name,
            max_words,
            prefs.active_description().unwrap_or_default()
        )
    }

    /// Generate a story title.
    #[instrument(skip_all, fields(theme = %prefs.theme_name, group = %prefs.age_group()))]
    pub async fn generate_title(&self, prefs: &PreferenceRequest) -> TaleforgeResult<String> {
        let title = self
            .complete(Self::title_prompt(prefs), NO_TITLE_FALLBACK)
            .await?;
        debug!(title = %title, "Title generated");
        Ok(title)
    }

    /// Generate a story body of roughly `max_words` words.
    #[instrument(skip_all, fields(theme = %prefs.theme_name, max_words = max_words))]
    pub async fn generate_story(
        &self,
        prefs: &PreferenceRequest,
        max_words: u32,
    ) -> TaleforgeResult<String> {
        let story = self
            .complete(Self::story_prompt(prefs, max_words), NO_STORY_FALLBACK)
            .await?;
        debug!(words = story.split_whitespace().count(), "Story generated");
        Ok(story)
    }

    async fn complete(&self, prompt: String, fallback: &str) -> TaleforgeResult<String> {
        let request = GenerateRequestBuilder::default()
            .prompt(prompt)
            .temperature(self.config.temperature)
            .top_p(self.config.top_p)
            .top_k(self.config.top_k)
            .max_output_tokens(self.config.max_output_tokens)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid generation request: {}", e)))?;

        let response = self.driver.generate(&request).await?;
        Ok(response.trimmed_or(fallback))
    }
}
