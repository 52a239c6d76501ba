pub mod prompt;
#[cfg(test)]
pub mod stub;

use std::future::Future;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RelayConfig;
use crate::errors::AppError;
use crate::models::{ChatMessage, MessageRole};

pub const MODEL: &str = "google/gemini-2.5-flash";
pub const MAX_TOKENS: u32 = 1024;
pub const TEMPERATURE: f32 = 0.7;

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    /// Prepends the persona preamble to the caller's history, leaving the
    /// caller's messages untouched and in order.
    pub fn for_conversation(history: &[ChatMessage], language: &str) -> Self {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::new(MessageRole::System, prompt::system_prompt(language)));
        messages.extend_from_slice(history);
        Self {
            model: MODEL.to_string(),
            messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, if the provider produced any.
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .filter(|text| !text.is_empty())
    }
}

// ── Provider seam ────────────────────────────────────────────────────────────

/// Anything that can answer a chat-completions request.
pub trait CompletionProvider: Clone + Send + Sync + 'static {
    fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, AppError>> + Send;
}

/// Client for the hosted, OpenAI-compatible inference gateway.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    url: String,
}

impl GatewayClient {
    pub fn new(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { client, url: config.gateway_url.clone() })
    }
}

impl CompletionProvider for GatewayClient {
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, AppError> {
        debug!("POST {} with {} messages", self.url, request.messages.len());

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(AppError::UpstreamTransport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::from_upstream_status(status.as_u16(), body));
        }

        response.json().await.map_err(AppError::UpstreamDecode)
    }
}
