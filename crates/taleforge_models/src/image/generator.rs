//! Cover image generation with bounded fixed-interval polling.

use std::sync::Arc;
use std::time::Duration;

use taleforge_core::PreferenceRequest;
use taleforge_error::{ExternalService, ExternalServiceError, TaleforgeResult, TimeoutError};
use tracing::{debug, info, instrument, warn};

use super::{ImageArguments, ImageProvider, QueueStatus};

/// Observed state of an image job after one poll attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    /// Still queued or running
    Pending {
        /// Progress lines reported so far
        logs: Vec<String>,
    },
    /// Finished and reported an image URL
    Completed {
        /// URL of the first generated image
        url: String,
    },
    /// Finished without a usable image; polling again cannot help
    Failed {
        /// Why the job is unusable
        reason: String,
    },
}

/// How long to keep polling a submitted job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Status checks before giving up
    pub max_attempts: u32,
    /// Fixed wait after each check
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval: Duration::from_secs(2),
        }
    }
}

/// Generates book cover images through an [`ImageProvider`].
#[derive(Clone)]
pub struct ImageGenerator {
    provider: Arc<dyn ImageProvider>,
    policy: PollPolicy,
}

impl std::fmt::Debug for ImageGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageGenerator")
            .field("provider", &self.provider.provider_name())
            .field("policy", &self.policy)
            .finish()
    }
}

impl ImageGenerator {
    /// Create a generator with the default 30 x 2s poll policy.
    pub fn new(provider: Arc<dyn ImageProvider>) -> Self {
        Self::with_policy(provider, PollPolicy::default())
    }

    /// Create a generator with a custom poll policy.
    pub fn with_policy(provider: Arc<dyn ImageProvider>, policy: PollPolicy) -> Self {
        Self { provider, policy }
    }

    /// The active poll policy.
    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Cover prompt with the fixed style directive and the group-appropriate description.
    pub fn cover_prompt(prefs: &PreferenceRequest) -> String {
        format!(
            "Create a book cover image for a {} story in a Ghibli style, ensuring that no title or text is included on the cover. Description: {}",
            prefs.age_group(),
            prefs.active_description().unwrap_or_default()
        )
    }

    /// Submit a cover job and wait for its image URL.
    ///
    /// # Errors
    ///
    /// - `ExternalServiceError` if submission fails, no request id comes back,
    ///   or the job completes without an image URL
    /// - `TimeoutError` if the job is still unfinished after every attempt
    #[instrument(skip_all, fields(provider = self.provider.provider_name(), group = %prefs.age_group()))]
    pub async fn generate_image(&self, prefs: &PreferenceRequest) -> TaleforgeResult<String> {
        let arguments = ImageArguments::cover(Self::cover_prompt(prefs));

        let request_id = self
            .provider
            .submit(&arguments)
            .await?
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                ExternalServiceError::new(ExternalService::ImageModel, 500, "Failed to get request ID")
            })?;
        info!(request_id = %request_id, "Image job submitted");

        self.wait_for_image(&request_id).await
    }

    /// Poll a submitted job until it completes, fails, or attempts run out.
    #[instrument(skip(self), fields(max_attempts = self.policy.max_attempts))]
    pub async fn wait_for_image(&self, request_id: &str) -> TaleforgeResult<String> {
        let mut waited = Duration::ZERO;

        for attempt in 1..=self.policy.max_attempts {
            match self.check(request_id).await {
                Ok(JobState::Completed { url }) => {
                    info!(attempt, url = %url, "Image job completed");
                    return Ok(url);
                }
                Ok(JobState::Failed { reason }) => {
                    warn!(attempt, reason = %reason, "Image job finished without an image");
                    return Err(
                        ExternalServiceError::new(ExternalService::ImageModel, 500, reason).into(),
                    );
                }
                Ok(JobState::Pending { logs }) => {
                    for line in logs {
                        debug!(attempt, "Progress: {}", line);
                    }
                }
                Err(e) => {
                    // Status checks are retried; only submission failures abort.
                    warn!(attempt, error = %e, "Error during image status check, will retry");
                }
            }

            tokio::time::sleep(self.policy.interval).await;
            waited += self.policy.interval;
        }

        Err(TimeoutError::new("image generation", self.policy.max_attempts, waited).into())
    }

    /// One poll attempt: read the queue status and, once completed, the result.
    async fn check(&self, request_id: &str) -> TaleforgeResult<JobState> {
        match self.provider.status(request_id).await? {
            QueueStatus::InQueue { queue_position } => {
                debug!(?queue_position, "Image job queued");
                Ok(JobState::Pending { logs: Vec::new() })
            }
            QueueStatus::InProgress { logs } => Ok(JobState::Pending {
                logs: logs
                    .unwrap_or_default()
                    .into_iter()
                    .map(|entry| entry.message)
                    .collect(),
            }),
            QueueStatus::Completed { .. } => {
                let output = self.provider.result(request_id).await?;
                Ok(match output.first_url() {
                    Some(url) => JobState::Completed {
                        url: url.to_string(),
                    },
                    None => JobState::Failed {
                        reason: "No image URL in response".to_string(),
                    },
                })
            }
        }
    }
}
