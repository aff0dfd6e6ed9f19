//! `scorecard import` command - parse a submissions CSV

use std::path::Path;

use crate::cli::Cli;
use crate::commands::helpers::load_projects;
use crate::output_by_format;
use scorecard_core::error::Result;
use scorecard_core::scoring::{grand_total, tier_for};

/// Execute the import command
pub fn execute(cli: &Cli, file: &Path) -> Result<()> {
    let projects = load_projects(file)?;

    output_by_format!(cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "file": file.display().to_string(),
                "count": projects.len(),
                "projects": projects,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            println!(
                "Imported {} project(s) from {}",
                projects.len(),
                file.display()
            );
            for project in &projects {
                let owner = if project.owner_name.is_empty() {
                    "unknown owner".to_string()
                } else {
                    project.owner_name.clone()
                };
                println!(
                    "  {:>3}  {} ({})",
                    project.project_number,
                    project.display_name(),
                    owner
                );
            }
            if cli.verbose {
                for project in &projects {
                    let total = grand_total(&project.scores);
                    println!(
                        "  {:>3}  total={} tier={}",
                        project.project_number,
                        total,
                        tier_for(total as i32).label
                    );
                }
            }
        }
    );

    Ok(())
}
