//! `scorecard export` command - write the ranked results CSV
//!
//! Combines the imported submissions with optional manual and AI score
//! files, then renders the rankings CSV. Output: stdout by default, or
//! `--output <path>` for a file.

use std::fs;
use std::path::Path;

use crate::cli::Cli;
use crate::commands::helpers::{apply_ai_file, apply_score_file, load_projects};
use crate::output_by_format;
use scorecard_core::csv::export_rankings;
use scorecard_core::error::Result;

/// Execute the export command
pub fn execute(
    cli: &Cli,
    file: &Path,
    scores: Option<&Path>,
    ai: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let mut projects = load_projects(file)?;
    if let Some(path) = scores {
        apply_score_file(&mut projects, path)?;
    }
    if let Some(path) = ai {
        apply_ai_file(&mut projects, path)?;
    }

    let csv = export_rankings(&projects);

    match output {
        Some(path) => {
            fs::write(path, &csv)?;
            output_by_format!(cli.format,
                json => {
                    let summary = serde_json::json!({
                        "status": "ok",
                        "output": path.display().to_string(),
                        "projects": projects.len(),
                    });
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                },
                human => {
                    if !cli.quiet {
                        println!(
                            "Exported {} project(s) to {}",
                            projects.len(),
                            path.display()
                        );
                    }
                }
            );
        }
        None => println!("{}", csv),
    }

    Ok(())
}
