//! Client for the local inference endpoint and reply decoding helpers.

pub mod client;
pub mod json;

pub use client::{ChatMessage, LlmClient, LlmConfig, Role};
pub use json::extract_json;
