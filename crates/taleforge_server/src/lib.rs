//! Story generation service.
//!
//! Accepts story preferences over HTTP, asks a text model for a title and a
//! story, asks an image model for a cover, and forwards the result to the
//! storage backend.
//!
//! # Flow
//!
//! `POST /api/generate-story` → [`StoryHandler::generate`]:
//! 1. validate the preferences
//! 2. title, then story ([`taleforge_models::TextGenerator`])
//! 3. cover image ([`taleforge_models::ImageGenerator`], polled)
//! 4. persist ([`StoryForwarder`])
//!
//! Steps run strictly in order; the first failure aborts the request.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod forwarder;
mod handler;

pub use api::{ApiError, AppState, create_router};
pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use forwarder::StoryForwarder;
pub use handler::StoryHandler;
