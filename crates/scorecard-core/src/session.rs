//! In-memory session state.
//!
//! Holds the working set of projects for one judging session. Imports
//! replace the whole collection; edits and scoring results mutate records
//! in place. Nothing is persisted here; callers serialize the session
//! themselves if they want it back later.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::ai::AiOutcome;
use crate::error::{Result, ScorecardError};
use crate::project::{AiScoringStatus, Project, ProjectField, ScoreMap};
use crate::rubric::SubcriterionId;

/// The working set of projects.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Session {
    projects: Vec<Project>,
    /// Monotonic counter behind per-project AI request tokens.
    #[serde(skip)]
    next_ai_token: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Replace the entire collection with a freshly imported set.
    ///
    /// All prior records, including their scores, are dropped.
    pub fn import(&mut self, projects: Vec<Project>) {
        info!(count = projects.len(), "session_import");
        self.projects = projects;
    }

    /// Append a blank project numbered one past the current maximum.
    pub fn add_project(&mut self) -> &Project {
        let number = self
            .projects
            .iter()
            .map(|p| p.project_number)
            .max()
            .unwrap_or(0)
            + 1;
        self.projects.push(Project::new(number));
        debug!(project_number = number, "session_add_project");
        self.projects.last().unwrap_or_else(|| unreachable!())
    }

    /// Remove a project by number.
    pub fn delete_project(&mut self, project_number: u32) -> Result<()> {
        let before = self.projects.len();
        self.projects.retain(|p| p.project_number != project_number);
        if self.projects.len() == before {
            return Err(ScorecardError::ProjectNotFound(project_number.to_string()));
        }
        Ok(())
    }

    pub fn project(&self, project_number: u32) -> Result<&Project> {
        self.projects
            .iter()
            .find(|p| p.project_number == project_number)
            .ok_or_else(|| ScorecardError::ProjectNotFound(project_number.to_string()))
    }

    fn project_mut(&mut self, project_number: u32) -> Result<&mut Project> {
        self.projects
            .iter_mut()
            .find(|p| p.project_number == project_number)
            .ok_or_else(|| ScorecardError::ProjectNotFound(project_number.to_string()))
    }

    /// Set one free-text field on a project.
    pub fn update_field(
        &mut self,
        project_number: u32,
        field: ProjectField,
        value: impl Into<String>,
    ) -> Result<()> {
        let project = self.project_mut(project_number)?;
        field.set(project, value);
        Ok(())
    }

    /// Set one manual subcriterion score.
    ///
    /// Values are stored as given; aggregation does not clamp, so callers
    /// validate ranges if they care.
    pub fn set_score(
        &mut self,
        project_number: u32,
        id: SubcriterionId,
        score: u32,
    ) -> Result<()> {
        let project = self.project_mut(project_number)?;
        project.scores.insert(id, score);
        Ok(())
    }

    /// Replace a project's full manual score map.
    pub fn set_scores(&mut self, project_number: u32, scores: ScoreMap) -> Result<()> {
        let project = self.project_mut(project_number)?;
        project.scores = scores;
        Ok(())
    }

    /// Mark a project as awaiting AI scores and issue a request token.
    ///
    /// The token returned must be presented back to [`complete_ai_scoring`]
    /// or [`fail_ai_scoring`]. Starting a new round invalidates any token
    /// still in flight for the same project.
    ///
    /// [`complete_ai_scoring`]: Session::complete_ai_scoring
    /// [`fail_ai_scoring`]: Session::fail_ai_scoring
    pub fn begin_ai_scoring(&mut self, project_number: u32) -> Result<u64> {
        self.next_ai_token += 1;
        let token = self.next_ai_token;

        let project = self.project_mut(project_number)?;
        project.ai_token = token;
        project.ai_scoring_status = AiScoringStatus::Loading;
        debug!(project_number, token, "ai_scoring_begin");
        Ok(token)
    }

    /// Record a successful AI scoring round.
    ///
    /// A completion carrying a token older than the project's current one
    /// belongs to a superseded request and is discarded without touching
    /// the record.
    pub fn complete_ai_scoring(
        &mut self,
        project_number: u32,
        token: u64,
        outcome: AiOutcome,
    ) -> Result<bool> {
        let project = self.project_mut(project_number)?;
        if project.ai_token != token {
            warn!(project_number, token, "stale_ai_completion_discarded");
            return Ok(false);
        }

        project.ai_scores = outcome.scores;
        project.ai_reasoning = outcome.reasoning;
        project.ai_scoring_status = AiScoringStatus::Done;
        info!(
            project_number,
            scored = project.ai_scores.len(),
            "ai_scoring_complete"
        );
        Ok(true)
    }

    /// Record a failed AI scoring round.
    ///
    /// Prior AI scores are left intact; only the status changes. Stale
    /// failures are discarded like stale completions.
    pub fn fail_ai_scoring(&mut self, project_number: u32, token: u64) -> Result<bool> {
        let project = self.project_mut(project_number)?;
        if project.ai_token != token {
            warn!(project_number, token, "stale_ai_failure_discarded");
            return Ok(false);
        }

        project.ai_scoring_status = AiScoringStatus::Error;
        Ok(true)
    }
}
