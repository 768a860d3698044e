//! Google Gemini text driver.

mod client;

pub use client::GeminiDriver;
