use std::time::Duration;

use crate::errors::AppError;

pub const API_KEY_VAR: &str = "AI_GATEWAY_API_KEY";
pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PORT: u16 = 8080;

/// Process-wide settings, read once at start-up and shared read-only.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    api_key: Option<String>,
    pub gateway_url: String,
    pub request_timeout: Duration,
    pub port: u16,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_VAR).filter(|k| !k.trim().is_empty());
        let gateway_url =
            lookup("AI_GATEWAY_URL").unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());
        let timeout_secs = lookup("AI_GATEWAY_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            api_key,
            gateway_url,
            request_timeout: Duration::from_secs(timeout_secs),
            port,
        }
    }

    #[cfg(test)]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The provider credential. Absence is reported per request rather than
    /// at start-up so the service still answers preflight and health checks.
    pub fn api_key(&self) -> Result<&str, AppError> {
        self.api_key
            .as_deref()
            .ok_or(AppError::MissingCredential { name: API_KEY_VAR })
    }
}
