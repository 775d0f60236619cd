//! LLM Client: the single point of entry for all Claude API calls in the service.
//!
//! ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
//! Orchestrators depend on the `CompletionProvider` trait, never on reqwest.
//!
//! Model: claude-3-haiku (hardcoded; latency matters more than depth here)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;
#[cfg(test)]
pub mod stub;

const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-3-haiku-20240307";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A single-turn completion: one user message under a token budget,
/// authenticated with the caller's effective credential.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub api_key: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
}

/// The provider seam. `LlmClient` is the production implementation;
/// tests swap in a stub that records calls.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the text of the first generated content block.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Wraps the Anthropic Messages API. The credential travels with each
/// request, so one client serves every caller.
///
/// No retries: a failed call is reported once and the orchestrator falls back.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
}

impl LlmClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: format!("{}{MESSAGES_PATH}", base_url.trim_end_matches('/')),
        })
    }

    /// Makes a raw call to the Claude API, returning the full response object.
    pub async fn call(
        &self,
        api_key: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let llm_response: LlmResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                usage.input_tokens, usage.output_tokens
            );
        }

        Ok(llm_response)
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        let response = self
            .call(request.api_key, request.prompt, request.max_tokens)
            .await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}
