use std::sync::{Arc, Mutex};

use super::{Choice, ChoiceMessage, CompletionProvider, CompletionRequest, CompletionResponse};
use crate::errors::AppError;

/// What the stub answers with.
#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    Body(CompletionResponse),
    Status(u16),
}

/// In-memory provider that records every request it receives.
#[derive(Clone)]
pub struct StubProvider {
    reply: StubReply,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl StubProvider {
    pub fn new(reply: StubReply) -> Self {
        Self { reply, calls: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn text(text: &str) -> Self {
        Self::new(StubReply::Text(text.to_string()))
    }

    pub fn status(status: u16) -> Self {
        Self::new(StubReply::Status(status))
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl CompletionProvider for StubProvider {
    async fn complete(
        &self,
        _api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, AppError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.reply {
            StubReply::Text(text) => Ok(CompletionResponse {
                choices: vec![Choice {
                    message: Some(ChoiceMessage { content: Some(text.clone()) }),
                }],
            }),
            StubReply::Body(body) => Ok(body.clone()),
            StubReply::Status(status) => {
                Err(AppError::from_upstream_status(*status, "stub failure".to_string()))
            }
        }
    }
}
