//! Core library for scorecard, a hackathon judging tool.
//!
//! Parses project intake CSVs, aggregates manual rubric scores into tiers,
//! runs an AI scoring round per project against the same rubric, and
//! exports a ranked results CSV.

pub mod ai;
pub mod config;
pub mod csv;
pub mod error;
pub mod logging;
pub mod project;
pub mod rubric;
pub mod scoring;
pub mod session;

pub use error::{ExitCode, Result, ScorecardError};
pub use project::{AiScoringStatus, Project, ProjectField, ReasoningMap, ScoreMap};
pub use rubric::SubcriterionId;
pub use session::Session;
