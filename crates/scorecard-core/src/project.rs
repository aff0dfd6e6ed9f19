//! Project records: one per competition submission.
//!
//! Records are created by CSV import (batch) or a manual add (single),
//! mutated by field edits, score edits, and AI scoring results, and live
//! only for the duration of the session.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::rubric::SubcriterionId;

/// Sparse per-subcriterion score mapping. An absent key counts as 0 when
/// aggregating.
pub type ScoreMap = BTreeMap<SubcriterionId, u32>;

/// Per-subcriterion rationale text from an AI scoring round.
pub type ReasoningMap = BTreeMap<SubcriterionId, String>;

/// Lifecycle of the most recent AI scoring attempt for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiScoringStatus {
    #[default]
    Idle,
    Loading,
    Done,
    Error,
}

impl fmt::Display for AiScoringStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AiScoringStatus::Idle => "idle",
            AiScoringStatus::Loading => "loading",
            AiScoringStatus::Done => "done",
            AiScoringStatus::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// One competition submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Generated unique id, stable for the lifetime of the record.
    pub id: String,
    /// Row number parsed from input; default ordering key.
    pub project_number: u32,

    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub root_cause: String,
    #[serde(default)]
    pub core_deficit: String,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub solution_statement: String,
    #[serde(default)]
    pub must_have: String,
    #[serde(default)]
    pub should_have: String,
    #[serde(default)]
    pub could_have: String,
    #[serde(default)]
    pub wont_have: String,

    /// Manual scores, keyed only for subcriteria the judge has set.
    #[serde(default)]
    pub scores: ScoreMap,
    /// AI scores from the most recent successful scoring round.
    #[serde(default)]
    pub ai_scores: ScoreMap,
    /// Rationales parallel to `ai_scores`.
    #[serde(default)]
    pub ai_reasoning: ReasoningMap,
    #[serde(default)]
    pub ai_scoring_status: AiScoringStatus,

    /// Latest issued AI request token; completions carrying an older token
    /// are discarded.
    #[serde(skip)]
    pub(crate) ai_token: u64,
}

impl Project {
    /// Create a blank project with a fresh id.
    pub fn new(project_number: u32) -> Self {
        Self {
            id: format!("project-{}", Ulid::new()),
            project_number,
            owner_name: String::new(),
            project_name: String::new(),
            symptoms: String::new(),
            root_cause: String::new(),
            core_deficit: String::new(),
            problem_statement: String::new(),
            solution_statement: String::new(),
            must_have: String::new(),
            should_have: String::new(),
            could_have: String::new(),
            wont_have: String::new(),
            scores: ScoreMap::new(),
            ai_scores: ScoreMap::new(),
            ai_reasoning: ReasoningMap::new(),
            ai_scoring_status: AiScoringStatus::Idle,
            ai_token: 0,
        }
    }

    /// Display name: the project name, falling back to the project number.
    pub fn display_name(&self) -> String {
        if self.project_name.is_empty() {
            format!("Project {}", self.project_number)
        } else {
            self.project_name.clone()
        }
    }

    /// True once an AI scoring round has stored at least one score.
    pub fn has_ai_scores(&self) -> bool {
        !self.ai_scores.is_empty()
    }
}

/// Editable free-text fields on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    OwnerName,
    ProjectName,
    Symptoms,
    RootCause,
    CoreDeficit,
    ProblemStatement,
    SolutionStatement,
    MustHave,
    ShouldHave,
    CouldHave,
    WontHave,
}

impl ProjectField {
    /// Set this field on a project.
    pub fn set(self, project: &mut Project, value: impl Into<String>) {
        let value = value.into();
        match self {
            ProjectField::OwnerName => project.owner_name = value,
            ProjectField::ProjectName => project.project_name = value,
            ProjectField::Symptoms => project.symptoms = value,
            ProjectField::RootCause => project.root_cause = value,
            ProjectField::CoreDeficit => project.core_deficit = value,
            ProjectField::ProblemStatement => project.problem_statement = value,
            ProjectField::SolutionStatement => project.solution_statement = value,
            ProjectField::MustHave => project.must_have = value,
            ProjectField::ShouldHave => project.should_have = value,
            ProjectField::CouldHave => project.could_have = value,
            ProjectField::WontHave => project.wont_have = value,
        }
    }
}
