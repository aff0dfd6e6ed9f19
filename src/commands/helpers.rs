//! Helper functions shared across commands

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use scorecard_core::ai::AiOutcome;
use scorecard_core::csv::parse_projects;
use scorecard_core::error::{Result, ScorecardError};
use scorecard_core::project::{Project, ScoreMap};

/// JSON score file shape: project number -> subcriterion id -> score.
pub type ScoreFile = BTreeMap<u32, ScoreMap>;

/// JSON AI result file shape: project number -> scores + reasoning.
pub type AiFile = BTreeMap<u32, AiOutcome>;

/// Read and parse a submissions CSV.
pub fn load_projects(file: &Path) -> Result<Vec<Project>> {
    let text = fs::read_to_string(file)?;
    Ok(parse_projects(&text))
}

/// Apply a manual score file to imported projects.
///
/// Entries for project numbers not present in the import are a data error;
/// a typo in the score file should not silently score nothing.
pub fn apply_score_file(projects: &mut [Project], path: &Path) -> Result<()> {
    let scores: ScoreFile = serde_json::from_str(&fs::read_to_string(path)?)?;

    for (number, map) in scores {
        let project = projects
            .iter_mut()
            .find(|p| p.project_number == number)
            .ok_or_else(|| ScorecardError::ProjectNotFound(number.to_string()))?;
        project.scores = map;
    }
    Ok(())
}

/// Apply an AI result file (as written by `ai-score --out`) to projects.
pub fn apply_ai_file(projects: &mut [Project], path: &Path) -> Result<()> {
    let outcomes: AiFile = serde_json::from_str(&fs::read_to_string(path)?)?;

    for (number, outcome) in outcomes {
        let project = projects
            .iter_mut()
            .find(|p| p.project_number == number)
            .ok_or_else(|| ScorecardError::ProjectNotFound(number.to_string()))?;
        project.ai_scores = outcome.scores;
        project.ai_reasoning = outcome.reasoning;
    }
    Ok(())
}
