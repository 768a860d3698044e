//! Cover image generation.

mod fal;
mod generator;
mod provider;

pub use fal::FalClient;
pub use generator::{ImageGenerator, JobState, PollPolicy};
pub use provider::{
    GeneratedImage, ImageArguments, ImageOutput, ImageProvider, LogEntry, QueueStatus,
};
