//! Request orchestration.

use taleforge_core::{PreferenceRequest, StoryRecord, StoryResponse};
use taleforge_error::{TaleforgeResult, ValidationError};
use taleforge_models::{ImageGenerator, TextGenerator};
use tracing::{info, instrument};

use crate::StoryForwarder;

/// Runs one story request end to end.
///
/// Holds no mutable state; a single handler is shared by all requests.
#[derive(Debug, Clone)]
pub struct StoryHandler {
    text: TextGenerator,
    image: ImageGenerator,
    forwarder: StoryForwarder,
    storage_endpoint: String,
}

impl StoryHandler {
    /// Create a handler that forwards finished stories to `storage_endpoint`.
    pub fn new(
        text: TextGenerator,
        image: ImageGenerator,
        forwarder: StoryForwarder,
        storage_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            text,
            image,
            forwarder,
            storage_endpoint: storage_endpoint.into(),
        }
    }

    /// URL finished stories are posted to.
    pub fn storage_endpoint(&self) -> &str {
        &self.storage_endpoint
    }

    /// Generate, illustrate, and store a story.
    ///
    /// Steps run in order: validation, title, story, cover image, forward.
    /// The first failure aborts the request and nothing is retried here.
    ///
    /// # Errors
    ///
    /// - `ValidationError` for a blank theme, a missing group description, or
    ///   an empty image URL
    /// - whatever the text, image, or storage step reports
    #[instrument(
        name = "generate_story",
        skip_all,
        fields(user_id = %prefs.user_id, group = %prefs.age_group())
    )]
    pub async fn generate(&self, prefs: &PreferenceRequest) -> TaleforgeResult<StoryResponse> {
        prefs.validate()?;
        let max_words = prefs.max_words();

        let title = self.text.generate_title(prefs).await?;
        let story = self.text.generate_story(prefs, max_words).await?;

        let image_url = self.image.generate_image(prefs).await?;
        if image_url.trim().is_empty() {
            return Err(
                ValidationError::new("Image generation failed, image_url is required.").into(),
            );
        }

        let record = StoryRecord::new(title, story, image_url, prefs.user_id.as_str());
        let forward_response = self
            .forwarder
            .forward(&record, &self.storage_endpoint)
            .await?;

        info!(title = %record.title(), "Story generated and stored");
        Ok(StoryResponse::from_record(record, forward_response))
    }
}
