//! Roadmap Gemini - Google Gemini text generation client
//!
//! Implements [`roadmap_core::TextGenerationClient`] over the Gemini
//! `generateContent` REST API.

#![warn(unreachable_pub)]

pub mod client;
pub mod config;
pub mod wire;

pub use client::GeminiClient;
pub use config::{
    GeminiConfig, DEFAULT_API_KEY_ENV, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS,
};
