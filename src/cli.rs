//! CLI argument parsing for scorecard.
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// Machine-readable JSON
    Json,
}

/// Scorecard - rubric-based scoring for AI automation competitions
#[derive(Parser, Debug)]
#[command(name = "scorecard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report progress detail
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a submissions CSV and list accepted projects
    Import {
        /// Path to the submissions CSV
        file: PathBuf,
    },

    /// Print the scoring rubric and tier table
    Rubric,

    /// Classify a total score into a tier
    Tier {
        /// Total score (0-100; out-of-range values still classify)
        score: i32,
    },

    /// Apply manual scores and print totals and tiers per project
    Score {
        /// Path to the submissions CSV
        file: PathBuf,

        /// JSON score file: project number -> subcriterion id -> score
        #[arg(long)]
        scores: PathBuf,
    },

    /// Score projects against the rubric with the AI judge
    AiScore {
        /// Path to the submissions CSV
        file: PathBuf,

        /// Score only this project number (default: all)
        #[arg(long)]
        project: Option<u32>,

        /// Write AI scores and reasoning as JSON to this path
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write the ranked results CSV
    Export {
        /// Path to the submissions CSV
        file: PathBuf,

        /// JSON manual score file: project number -> subcriterion id -> score
        #[arg(long)]
        scores: Option<PathBuf>,

        /// JSON AI score file as written by ai-score --out
        #[arg(long)]
        ai: Option<PathBuf>,

        /// Output path (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
