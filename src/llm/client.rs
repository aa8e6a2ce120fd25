//! HTTP client for an Ollama-style local inference endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Connection settings for the inference endpoint.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.1".to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn in a conversation with the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

/// Client for the local inference endpoint.
///
/// A client owns the history of exactly one conversation. Callers create a
/// fresh client per logical conversation; instances are never shared across
/// stages. History lives only as long as the client.
pub struct LlmClient {
    http: reqwest::Client,
    config: LlmConfig,
    history: Vec<ChatMessage>,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(LlmError::Transport)?;
        Ok(Self { http, config, history: Vec::new() })
    }

    /// Send a single standalone prompt. No history side effect.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let body = serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
        });

        let payload: GenerateResponse = self
            .post("/api/generate", &body)
            .await?;
        Ok(payload.response)
    }

    /// Send one conversation turn.
    ///
    /// Appends `message` to the private history, sends the entire accumulated
    /// history, appends the model's reply, and returns the reply.
    pub async fn chat(&mut self, message: ChatMessage) -> Result<ChatMessage, LlmError> {
        self.history.push(message);
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": self.history,
            "stream": false,
        });

        let payload: ChatResponse = self.post("/api/chat", &body).await?;
        self.history.push(payload.message.clone());
        Ok(payload.message)
    }

    /// The conversation history accumulated so far.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        route: &str,
        body: &serde_json::Value,
    ) -> Result<T, LlmError> {
        let response = self
            .http
            .post(format!("{}{}", self.config.base_url, route))
            .json(body)
            .send()
            .await
            .map_err(LlmError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Protocol(format!(
                "endpoint returned {status} for {route}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LlmError::Protocol(format!("could not decode {route} reply: {e}")))
    }
}
