//! Configuration for the AI scoring collaborator.
//!
//! The core never manages retries or rate limiting; it only needs to know
//! where to send the prompt and which credential to attach.

use crate::error::{Result, ScorecardError};

/// Primary credential variable.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
/// Fallback credential variable.
pub const API_KEY_FALLBACK_ENV: &str = "SCORECARD_API_KEY";
/// Endpoint override, mainly for tests pointing at a mock server.
pub const API_BASE_ENV: &str = "SCORECARD_API_BASE";
/// Model override.
pub const MODEL_ENV: &str = "SCORECARD_AI_MODEL";

const DEFAULT_API_BASE: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Settings for the external text-generation endpoint.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub max_tokens: u32,
}

impl AiConfig {
    /// Build a config from environment variables.
    ///
    /// A missing credential is fatal for the AI scoring feature only; the
    /// rest of the tool stays usable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .or_else(|_| std::env::var(API_KEY_FALLBACK_ENV))
            .map_err(|_| ScorecardError::MissingApiKey)?;

        let api_base =
            std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            api_base,
            model,
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }

    /// Build a config with explicit endpoint and key, for tests.
    pub fn with_endpoint(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: api_base.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_endpoint() {
        let cfg = AiConfig::with_endpoint("http://127.0.0.1:9999", "test-key");
        assert_eq!(cfg.api_base, "http://127.0.0.1:9999");
        assert_eq!(cfg.api_key, "test-key");
        assert_eq!(cfg.max_tokens, 4000);
    }
}
