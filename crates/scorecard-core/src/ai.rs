//! AI scoring adapter.
//!
//! Builds a rubric-grounded prompt for one project, sends it to the
//! external text-generation endpoint in a single request, and parses the
//! constrained JSON-array reply back into per-criterion scores and
//! rationales.

mod client;
mod prompt;

use serde::{Deserialize, Serialize};

use crate::project::{ReasoningMap, ScoreMap};

pub use client::{parse_ai_response, AiClient};
pub use prompt::build_scoring_prompt;

/// Result of a successful AI scoring round: parallel score and rationale
/// maps keyed by subcriterion id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiOutcome {
    pub scores: ScoreMap,
    pub reasoning: ReasoningMap,
}
