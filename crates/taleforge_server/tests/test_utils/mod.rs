//! Shared doubles and fixtures for server tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use taleforge_core::{GenerateRequest, GenerateResponse, PreferenceRequest};
use taleforge_error::{GeminiError, GeminiErrorKind, TaleforgeResult};
use taleforge_models::{
    GeneratedImage, ImageArguments, ImageGenerator, ImageOutput, ImageProvider, QueueStatus,
    TextDriver, TextGenerationConfig, TextGenerator,
};
use taleforge_server::{ServiceConfig, ServiceConfigBuilder, StoryForwarder, StoryHandler};

pub const TITLE: &str = "Rocket Rides to the Moon";
pub const STORY: &str = "Once upon a time a little rocket flew up high.";
pub const IMAGE_URL: &str = "https://fal.media/files/cover.jpg";

/// Answers title prompts with [`TITLE`] and everything else with [`STORY`].
#[derive(Default)]
pub struct ScriptedTextDriver {
    prompts: Mutex<Vec<String>>,
}

impl ScriptedTextDriver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextDriver for ScriptedTextDriver {
    async fn generate(&self, req: &GenerateRequest) -> TaleforgeResult<GenerateResponse> {
        self.prompts.lock().unwrap().push(req.prompt().clone());
        if req.prompt().starts_with("Generate") {
            Ok(GenerateResponse::text(format!("  {}\n", TITLE)))
        } else {
            Ok(GenerateResponse::text(STORY))
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-text"
    }
}

/// Fails every request the way the Gemini SDK reports an overloaded model.
#[derive(Default)]
pub struct FailingTextDriver {
    calls: Mutex<u32>,
}

impl FailingTextDriver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TextDriver for FailingTextDriver {
    async fn generate(&self, _req: &GenerateRequest) -> TaleforgeResult<GenerateResponse> {
        *self.calls.lock().unwrap() += 1;
        Err(GeminiError::new(GeminiErrorKind::HttpError {
            status_code: 503,
            message: "model overloaded".to_string(),
        })
        .into())
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }

    fn model_name(&self) -> &str {
        "failing-text"
    }
}

/// Completes every job on the first status check.
///
/// The result carries one image with `url`, or no images at all when `url` is `None`.
pub struct InstantImageProvider {
    url: Option<String>,
    submitted: Mutex<Vec<ImageArguments>>,
}

impl InstantImageProvider {
    pub fn new(url: &str) -> Arc<Self> {
        Arc::new(Self {
            url: Some(url.to_string()),
            submitted: Mutex::new(Vec::new()),
        })
    }

    pub fn without_images() -> Arc<Self> {
        Arc::new(Self {
            url: None,
            submitted: Mutex::new(Vec::new()),
        })
    }

    pub fn submitted(&self) -> Vec<ImageArguments> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageProvider for InstantImageProvider {
    async fn submit(&self, arguments: &ImageArguments) -> TaleforgeResult<Option<String>> {
        self.submitted.lock().unwrap().push(arguments.clone());
        Ok(Some("req-1".to_string()))
    }

    async fn status(&self, _request_id: &str) -> TaleforgeResult<QueueStatus> {
        Ok(QueueStatus::Completed { logs: None })
    }

    async fn result(&self, _request_id: &str) -> TaleforgeResult<ImageOutput> {
        Ok(ImageOutput {
            images: self
                .url
                .iter()
                .map(|url| GeneratedImage {
                    url: Some(url.clone()),
                    content_type: Some("image/jpeg".to_string()),
                })
                .collect(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "instant"
    }
}

pub fn config(storage_base_url: &str) -> ServiceConfig {
    ServiceConfigBuilder::default()
        .gemini_api_key("test-gemini")
        .fal_key("test-fal")
        .storage_base_url(storage_base_url)
        .build()
        .unwrap()
}

/// Handler wired to the given doubles and a storage backend at `storage_base_url`.
pub fn handler(
    text: Arc<dyn TextDriver>,
    image: Arc<dyn ImageProvider>,
    storage_base_url: &str,
) -> StoryHandler {
    StoryHandler::new(
        TextGenerator::new(text, TextGenerationConfig::default()),
        ImageGenerator::new(image),
        StoryForwarder::new(),
        config(storage_base_url).storage_endpoint(),
    )
}

pub fn toddler_prefs() -> PreferenceRequest {
    PreferenceRequest {
        group_name: "toddler".to_string(),
        theme_name: "Space".to_string(),
        image_desc: Some("a rocket".to_string()),
        story_desc: None,
        user_id: "user-42".to_string(),
    }
}
