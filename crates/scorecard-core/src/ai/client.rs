//! HTTP client for the external text-generation endpoint and parsing of
//! its reply.

use tracing::debug;

use crate::ai::{build_scoring_prompt, AiOutcome};
use crate::config::AiConfig;
use crate::error::{Result, ScorecardError};
use crate::project::Project;
use crate::rubric::SubcriterionId;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the AI scoring endpoint.
///
/// One request per invocation: no streaming, no retries, no queuing.
/// Concurrent invocations for the same project are the caller's concern.
pub struct AiClient {
    http: reqwest::Client,
    config: AiConfig,
}

impl AiClient {
    pub fn new(config: AiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Score one project against the rubric via a single generation request.
    pub async fn score_project(&self, project: &Project) -> Result<AiOutcome> {
        let prompt = build_scoring_prompt(project);

        let body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "messages": [
                { "role": "user", "content": prompt }
            ],
        });

        debug!(
            project = %project.display_name(),
            model = %self.config.model,
            "ai_score_request"
        );

        let response = self
            .http
            .post(format!("{}/v1/messages", self.config.api_base))
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let payload: serde_json::Value = response.json().await.unwrap_or_default();
            let message = payload
                .pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("request failed with status {}", status));
            return Err(ScorecardError::Upstream { status, message });
        }

        let payload: serde_json::Value = response.json().await?;
        let text = payload
            .pointer("/content/0/text")
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                ScorecardError::AiResponseParse("missing content text in response".to_string())
            })?;

        parse_ai_response(text)
    }
}

/// Parse the generation reply into score and rationale maps.
///
/// The first `[` through the last `]` is treated as the JSON array, which
/// tolerates any prose the model added around it. Elements with a known
/// subcriterion id and an integer score are recorded; anything else is
/// skipped. A reply with no bracketed array, or one that is not valid
/// JSON, fails the whole operation.
pub fn parse_ai_response(text: &str) -> Result<AiOutcome> {
    let start = text
        .find('[')
        .ok_or_else(|| ScorecardError::AiResponseParse("no JSON array in response".to_string()))?;
    let end = text
        .rfind(']')
        .filter(|&end| end > start)
        .ok_or_else(|| ScorecardError::AiResponseParse("no JSON array in response".to_string()))?;

    let value: serde_json::Value = serde_json::from_str(&text[start..=end])
        .map_err(|e| ScorecardError::AiResponseParse(e.to_string()))?;
    let items = value
        .as_array()
        .ok_or_else(|| ScorecardError::AiResponseParse("expected a JSON array".to_string()))?;

    let mut outcome = AiOutcome::default();
    for item in items {
        let Some(id) = item.get("id").and_then(|v| v.as_str()) else {
            continue;
        };
        let Some(score) = item.get("score").and_then(|v| v.as_u64()) else {
            continue;
        };
        let Ok(sub) = id.trim().parse::<SubcriterionId>() else {
            // The closed id enumeration drops criteria the rubric does
            // not define.
            continue;
        };

        outcome.scores.insert(sub, score as u32);
        outcome.reasoning.insert(
            sub,
            item.get("reasoning")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        );
    }

    debug!(scored = outcome.scores.len(), "parse_ai_response");

    Ok(outcome)
}
