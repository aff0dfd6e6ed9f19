//! CLI commands for scorecard

pub mod ai;
pub mod dispatch;
pub mod export;
pub mod format;
pub mod helpers;
pub mod import;
pub mod rubric;
pub mod score;
pub mod tier;
