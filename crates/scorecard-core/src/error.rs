//! Error types and exit codes for scorecard
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown project, unknown criterion)

use thiserror::Error;

/// Exit codes for the scorecard CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown project or criterion (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during scorecard operations
#[derive(Error, Debug)]
pub enum ScorecardError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("unknown subcriterion id: {0}")]
    UnknownSubcriterion(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(
        "no API key configured: set {key} (or {fallback}) to enable AI scoring",
        key = crate::config::API_KEY_ENV,
        fallback = crate::config::API_KEY_FALLBACK_ENV
    )]
    MissingApiKey,

    #[error("AI scoring request failed with status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("could not parse AI response: {0}")]
    AiResponseParse(String),

    #[error("{0}")]
    Other(String),
}

impl ScorecardError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ScorecardError::UsageError(_) => ExitCode::Usage,

            ScorecardError::ProjectNotFound(_) | ScorecardError::UnknownSubcriterion(_) => {
                ExitCode::Data
            }

            ScorecardError::Io(_)
            | ScorecardError::Json(_)
            | ScorecardError::Http(_)
            | ScorecardError::MissingApiKey
            | ScorecardError::Upstream { .. }
            | ScorecardError::AiResponseParse(_)
            | ScorecardError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier for structured output
    fn error_type(&self) -> &'static str {
        match self {
            ScorecardError::UsageError(_) => "usage_error",
            ScorecardError::ProjectNotFound(_) => "project_not_found",
            ScorecardError::UnknownSubcriterion(_) => "unknown_subcriterion",
            ScorecardError::Io(_) => "io_error",
            ScorecardError::Json(_) => "json_error",
            ScorecardError::Http(_) => "http_error",
            ScorecardError::MissingApiKey => "missing_api_key",
            ScorecardError::Upstream { .. } => "upstream_error",
            ScorecardError::AiResponseParse(_) => "ai_response_parse",
            ScorecardError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for scorecard operations
pub type Result<T> = std::result::Result<T, ScorecardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            ScorecardError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            ScorecardError::ProjectNotFound("7".into()).exit_code(),
            ExitCode::Data
        );
        assert_eq!(ScorecardError::MissingApiKey.exit_code(), ExitCode::Failure);
        assert_eq!(
            ScorecardError::Upstream {
                status: 429,
                message: "rate limited".into()
            }
            .exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_shape() {
        let err = ScorecardError::AiResponseParse("no JSON array in response".into());
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 1);
        assert_eq!(json["error"]["type"], "ai_response_parse");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("could not parse AI response"));
    }
}
