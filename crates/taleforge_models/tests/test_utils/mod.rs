//! Test doubles for the provider traits.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use taleforge_core::{GenerateRequest, GenerateResponse, PreferenceRequest};
use taleforge_error::{ExternalService, ExternalServiceError, TaleforgeResult};
use taleforge_models::{
    GeneratedImage, ImageArguments, ImageOutput, ImageProvider, LogEntry, QueueStatus, TextDriver,
};

/// Text driver that answers every prompt with the same response and records prompts.
pub struct MockTextDriver {
    response: GenerateResponse,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockTextDriver {
    pub fn new_success(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: GenerateResponse::text(text),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn new_empty() -> Arc<Self> {
        Arc::new(Self {
            response: GenerateResponse::empty(),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextDriver for MockTextDriver {
    async fn generate(&self, req: &GenerateRequest) -> TaleforgeResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        Ok(self.response.clone())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-text"
    }
}

/// A scripted answer to one status check.
#[derive(Debug, Clone)]
pub enum MockStatus {
    InQueue,
    InProgress(Vec<&'static str>),
    Completed,
    Error(u16),
}

/// Image provider that replays a status script and counts calls.
///
/// Once the script runs out the last entry repeats.
pub struct MockImageProvider {
    request_id: Option<String>,
    statuses: Mutex<VecDeque<MockStatus>>,
    last: Mutex<MockStatus>,
    output: ImageOutput,
    status_calls: Mutex<u32>,
    result_calls: Mutex<u32>,
    submitted: Mutex<Vec<ImageArguments>>,
}

impl MockImageProvider {
    pub fn new(statuses: Vec<MockStatus>, output: ImageOutput) -> Arc<Self> {
        let last = statuses.last().cloned().unwrap_or(MockStatus::InQueue);
        Arc::new(Self {
            request_id: Some("req-123".to_string()),
            statuses: Mutex::new(statuses.into()),
            last: Mutex::new(last),
            output,
            status_calls: Mutex::new(0),
            result_calls: Mutex::new(0),
            submitted: Mutex::new(Vec::new()),
        })
    }

    /// Pending `pending` times, then completed with `url`.
    pub fn completes_after(pending: usize, url: &str) -> Arc<Self> {
        let mut statuses = vec![MockStatus::InProgress(vec!["step"]); pending];
        statuses.push(MockStatus::Completed);
        Self::new(statuses, image_output(Some(url)))
    }

    pub fn without_request_id() -> Arc<Self> {
        Arc::new(Self {
            request_id: None,
            statuses: Mutex::new(VecDeque::new()),
            last: Mutex::new(MockStatus::InQueue),
            output: ImageOutput::default(),
            status_calls: Mutex::new(0),
            result_calls: Mutex::new(0),
            submitted: Mutex::new(Vec::new()),
        })
    }

    pub fn status_calls(&self) -> u32 {
        *self.status_calls.lock().unwrap()
    }

    pub fn result_calls(&self) -> u32 {
        *self.result_calls.lock().unwrap()
    }

    pub fn submitted(&self) -> Vec<ImageArguments> {
        self.submitted.lock().unwrap().clone()
    }
}

pub fn image_output(url: Option<&str>) -> ImageOutput {
    ImageOutput {
        images: url
            .map(|u| {
                vec![GeneratedImage {
                    url: Some(u.to_string()),
                    content_type: Some("image/jpeg".to_string()),
                }]
            })
            .unwrap_or_default(),
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    async fn submit(&self, arguments: &ImageArguments) -> TaleforgeResult<Option<String>> {
        self.submitted.lock().unwrap().push(arguments.clone());
        Ok(self.request_id.clone())
    }

    async fn status(&self, _request_id: &str) -> TaleforgeResult<QueueStatus> {
        *self.status_calls.lock().unwrap() += 1;
        let next = self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.last.lock().unwrap().clone());

        match next {
            MockStatus::InQueue => Ok(QueueStatus::InQueue {
                queue_position: Some(1),
            }),
            MockStatus::InProgress(lines) => Ok(QueueStatus::InProgress {
                logs: Some(
                    lines
                        .into_iter()
                        .map(|message| LogEntry {
                            message: message.to_string(),
                        })
                        .collect(),
                ),
            }),
            MockStatus::Completed => Ok(QueueStatus::Completed { logs: None }),
            MockStatus::Error(status) => Err(ExternalServiceError::new(
                ExternalService::ImageModel,
                status,
                "status check failed",
            )
            .into()),
        }
    }

    async fn result(&self, _request_id: &str) -> TaleforgeResult<ImageOutput> {
        *self.result_calls.lock().unwrap() += 1;
        Ok(self.output.clone())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

pub fn toddler_prefs() -> PreferenceRequest {
    PreferenceRequest {
        group_name: "toddler".to_string(),
        theme_name: "Space".to_string(),
        image_desc: Some("a rocket".to_string()),
        story_desc: Some("ignored saga".to_string()),
        user_id: "user-1".to_string(),
    }
}

pub fn kid_prefs() -> PreferenceRequest {
    PreferenceRequest {
        group_name: "Kid".to_string(),
        theme_name: "Ocean".to_string(),
        image_desc: Some("ignored picture".to_string()),
        story_desc: Some("a whale who sings".to_string()),
        user_id: "user-2".to_string(),
    }
}
