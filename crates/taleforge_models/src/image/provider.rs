//! Asynchronous image job provider interface and wire types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use taleforge_error::TaleforgeResult;

/// Arguments for one image-generation job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageArguments {
    /// Full image prompt
    pub prompt: String,
    /// Named aspect preset
    pub image_size: String,
    /// Images to produce
    pub num_images: u32,
    /// Ask the provider to filter unsafe output
    pub enable_safety_checker: bool,
    /// Diffusion steps
    pub num_inference_steps: u32,
    /// Classifier-free guidance scale
    pub guidance_scale: f32,
    /// Block until the image is ready instead of queueing
    pub sync_mode: bool,
}

impl ImageArguments {
    /// A single portrait book cover, queued asynchronously.
    pub fn cover(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image_size: "portrait_4_3".to_string(),
            num_images: 1,
            enable_safety_checker: true,
            num_inference_steps: 8,
            guidance_scale: 3.5,
            sync_mode: false,
        }
    }
}

/// One progress line reported by a running job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Log text
    #[serde(default)]
    pub message: String,
}

/// Queue status of a submitted job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueStatus {
    /// Waiting for a worker
    InQueue {
        /// Position in the queue, when reported
        #[serde(default)]
        queue_position: Option<u32>,
    },
    /// Running
    InProgress {
        /// Progress lines so far
        #[serde(default)]
        logs: Option<Vec<LogEntry>>,
    },
    /// Finished; the result can be fetched
    Completed {
        /// Progress lines of the whole run
        #[serde(default)]
        logs: Option<Vec<LogEntry>>,
    },
}

/// A generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Where the image can be downloaded
    #[serde(default)]
    pub url: Option<String>,
    /// MIME type, when reported
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Result payload of a completed job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageOutput {
    /// Generated images, in provider order
    #[serde(default)]
    pub images: Vec<GeneratedImage>,
}

impl ImageOutput {
    /// URL of the first image, exactly as the provider reported it.
    ///
    /// `None` when there are no images or the first one carries no URL. An
    /// empty URL is passed through; rejecting it is up to the caller.
    pub fn first_url(&self) -> Option<&str> {
        self.images.first().and_then(|image| image.url.as_deref())
    }
}

/// A provider that runs image jobs asynchronously: submit, poll, fetch.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Queue a job, returning its request id if the provider issued one.
    async fn submit(&self, arguments: &ImageArguments) -> TaleforgeResult<Option<String>>;

    /// Current queue status of a job.
    async fn status(&self, request_id: &str) -> TaleforgeResult<QueueStatus>;

    /// Result of a completed job.
    async fn result(&self, request_id: &str) -> TaleforgeResult<ImageOutput>;

    /// Provider name (e.g., "fal").
    fn provider_name(&self) -> &'static str;
}
