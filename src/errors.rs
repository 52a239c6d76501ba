use axum::http::StatusCode;
use thiserror::Error;

const GENERIC_ERROR: &str = "An unexpected error occurred.";
const GENERIC_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Everything that can go wrong while relaying one chat turn.
/// Each variant knows the HTTP status and the caller-facing text it maps to.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("{name} is not configured")]
    MissingCredential { name: &'static str },

    // ── Provider errors ──────────────────────────────────────────────────────
    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,

    #[error("Service temporarily unavailable.")]
    QuotaExhausted,

    #[error("AI gateway error: {status} {body}")]
    Upstream { status: u16, body: String },

    #[error("AI gateway request failed: {0}")]
    UpstreamTransport(#[source] reqwest::Error),

    #[error("AI gateway returned an unreadable body: {0}")]
    UpstreamDecode(#[source] reqwest::Error),

    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Field '{field_name}' cannot be empty")]
    EmptyField { field_name: String },

    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },
}

impl AppError {
    /// Classifies a non-success provider status.
    pub fn from_upstream_status(status: u16, body: String) -> Self {
        match status {
            429 => AppError::RateLimited,
            402 => AppError::QuotaExhausted,
            _ => AppError::Upstream { status, body },
        }
    }

    pub fn empty_field(field_name: impl Into<String>) -> Self {
        AppError::EmptyField { field_name: field_name.into() }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::EmptyField { .. } | AppError::InvalidBody { .. })
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
            e if e.is_validation() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text for the `error` field. Server-side failures stay generic so
    /// provider details never reach the browser.
    pub fn public_message(&self) -> String {
        match self {
            AppError::RateLimited | AppError::QuotaExhausted => self.to_string(),
            e if e.is_validation() => self.to_string(),
            _ => GENERIC_ERROR.to_string(),
        }
    }

    /// Displayable text for the `response` field, shown in the chat bubble.
    pub fn fallback_reply(&self) -> &'static str {
        match self {
            AppError::RateLimited => {
                "I'm receiving too many requests right now. Please wait a moment and try again."
            }
            AppError::QuotaExhausted => {
                "The AI service is temporarily unavailable. Please try again later."
            }
            e if e.is_validation() => "Please type a question about your farm and try again.",
            _ => GENERIC_REPLY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_classification() {
        assert!(matches!(AppError::from_upstream_status(429, String::new()), AppError::RateLimited));
        assert!(matches!(AppError::from_upstream_status(402, String::new()), AppError::QuotaExhausted));
        assert!(matches!(
            AppError::from_upstream_status(503, "down".into()),
            AppError::Upstream { status: 503, .. }
        ));
    }

    #[test]
    fn status_codes() {
        assert_eq!(AppError::RateLimited.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(AppError::QuotaExhausted.status_code(), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(AppError::empty_field("messages").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::MissingCredential { name: "AI_GATEWAY_API_KEY" }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn server_side_failures_do_not_leak_detail() {
        let err = AppError::Upstream { status: 500, body: "secret stack trace".into() };
        assert_eq!(err.public_message(), GENERIC_ERROR);
        assert_eq!(err.fallback_reply(), GENERIC_REPLY);

        let err = AppError::MissingCredential { name: "AI_GATEWAY_API_KEY" };
        assert!(!err.public_message().contains("AI_GATEWAY_API_KEY"));
    }

    #[test]
    fn rate_limit_message_mentions_too_many_requests() {
        let err = AppError::RateLimited;
        assert!(err.public_message().starts_with("Too many requests"));
        assert!(!err.fallback_reply().is_empty());
    }
}
