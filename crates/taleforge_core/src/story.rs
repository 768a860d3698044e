//! Generated story records.

use serde::{Deserialize, Serialize};

/// A finished story, shaped the way the storage backend expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryRecord {
    /// Generated title
    #[serde(rename = "storyGenTitle")]
    title: String,
    /// Generated story body
    #[serde(rename = "storyBook")]
    story: String,
    /// Cover image URL
    #[serde(rename = "storyImageUrl")]
    image_url: String,
    /// Owner of the story
    #[serde(rename = "userId")]
    user_id: String,
}

impl StoryRecord {
    /// Assemble a record from the generated parts.
    pub fn new(
        title: impl Into<String>,
        story: impl Into<String>,
        image_url: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            story: story.into(),
            image_url: image_url.into(),
            user_id: user_id.into(),
        }
    }
}

/// Body returned to the caller of `/api/generate-story`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryResponse {
    /// Generated title
    pub title: String,
    /// Generated story body
    pub story: String,
    /// Cover image URL
    pub image_url: String,
    /// Storage backend acknowledgment, passed through untouched
    #[serde(rename = "csharp_response")]
    pub forward_response: serde_json::Value,
}

impl StoryResponse {
    /// Combine a stored record with the backend's acknowledgment.
    pub fn from_record(record: StoryRecord, forward_response: serde_json::Value) -> Self {
        Self {
            title: record.title,
            story: record.story,
            image_url: record.image_url,
            forward_response,
        }
    }
}
