use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::System => "system",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Body of `POST /chat`: the caller's history, oldest first.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default = "default_language")]
    pub language: String,
}

/// Body of every relay response. `error` is present only on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub response: String,
}

impl ChatResponse {
    pub fn reply(response: impl Into<String>) -> Self {
        Self { error: None, response: response.into() }
    }

    pub fn failure(error: impl Into<String>, response: impl Into<String>) -> Self {
        Self { error: Some(error.into()), response: response.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_defaults_to_english() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"messages":[{"role":"user","content":"hi"}]}"#).unwrap();
        assert_eq!(req.language, "en");
        assert_eq!(req.messages, vec![ChatMessage::new(MessageRole::User, "hi")]);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let res = serde_json::from_str::<ChatRequest>(
            r#"{"messages":[{"role":"farmer","content":"hi"}],"language":"hi"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn success_body_has_no_error_field() {
        let json = serde_json::to_value(ChatResponse::reply("ok")).unwrap();
        assert_eq!(json, serde_json::json!({ "response": "ok" }));

        let json = serde_json::to_value(ChatResponse::failure("bad", "sorry")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "bad", "response": "sorry" }));
    }
}
