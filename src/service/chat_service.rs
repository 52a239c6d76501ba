use std::sync::Arc;

use tracing::{info, warn};

use crate::agent::{CompletionProvider, CompletionRequest};
use crate::config::RelayConfig;
use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse};

pub const FALLBACK_REPLY: &str = "I apologize, I could not process your request.";

#[derive(Clone)]
pub struct ChatService<P> {
    config: Arc<RelayConfig>,
    provider: P,
}

impl<P: CompletionProvider> ChatService<P> {
    pub fn new(config: Arc<RelayConfig>, provider: P) -> Self {
        Self { config, provider }
    }

    /// Relays one conversation turn to the provider and returns its reply.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, AppError> {
        info!(
            message_count = request.messages.len(),
            language = %request.language,
            "Chat request received"
        );

        // ── Validation ────────────────────────────────────────────────────────
        if request.messages.is_empty() {
            return Err(AppError::empty_field("messages"));
        }
        if let Some(i) = request.messages.iter().position(|m| m.content.is_empty()) {
            return Err(AppError::empty_field(format!("messages[{i}].content")));
        }

        let api_key = self.config.api_key()?;

        // ── Forward to the provider ───────────────────────────────────────────
        let outbound = CompletionRequest::for_conversation(&request.messages, &request.language);
        let completion = self.provider.complete(api_key, &outbound).await?;

        let reply = match completion.first_text() {
            Some(text) => text.to_string(),
            None => {
                warn!("Provider returned no completion text, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };

        info!(reply_chars = reply.chars().count(), "Chat response generated");
        Ok(ChatResponse::reply(reply))
    }
}
