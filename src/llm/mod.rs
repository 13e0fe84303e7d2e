//! Chat-completions client
//!
//! A thin, stateless request/response wrapper around an OpenAI-style
//! chat-completions endpoint. One POST per call with a fixed payload shape;
//! the response text is passed through with surrounding double quotes
//! stripped. Endpoint, model, and API key come from the caller; nothing
//! here reads the environment.

use crate::config::LlmConfig;
use crate::LlmError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    stream: bool,
    temperature: f32,
    top_p: f32,
    stop: Option<String>,
    frequency_penalty: f32,
    presence_penalty: f32,
    seed: u64,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Client for a single chat-completions endpoint
pub struct LlmClient {
    http: Client,
    config: LlmConfig,
    api_key: String,
}

impl LlmClient {
    /// Creates a client for the configured endpoint
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint, model, and sampling configuration
    /// * `api_key` - Bearer token sent with each request
    pub fn new(config: LlmConfig, api_key: impl Into<String>) -> Result<Self, LlmError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config,
            api_key: api_key.into(),
        })
    }

    /// Sends one completion request: `context` as the system message,
    /// `prompt` as the user message. Returns the response text with
    /// surrounding double quotes stripped.
    pub async fn complete(&self, context: &str, prompt: &str) -> Result<String, LlmError> {
        let payload = ChatRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            stream: false,
            temperature: self.config.temperature,
            top_p: 1.0,
            stop: None,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            seed: 0,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: context,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::MalformedResponse("no choices in response".to_string()))?;

        Ok(choice.message.content.trim_matches('"').to_string())
    }
}
