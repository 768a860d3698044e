//! Core data types for the Taleforge story service.
//!
//! This crate provides the request/response records shared by the providers
//! and the HTTP layer, plus logging setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generate;
mod preferences;
mod story;
mod telemetry;

pub use generate::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use preferences::{AgeGroup, PreferenceRequest, DEFAULT_MAX_WORDS, TODDLER_MAX_WORDS};
pub use story::{StoryRecord, StoryResponse};
pub use telemetry::{init_tracing, LogFormat};
