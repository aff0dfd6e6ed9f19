//! `scorecard score` command - apply manual scores and report totals

use std::path::Path;

use crate::cli::Cli;
use crate::commands::helpers::{apply_score_file, load_projects};
use crate::output_by_format;
use scorecard_core::error::Result;
use scorecard_core::rubric::rubric;
use scorecard_core::scoring::{category_total, grand_total, tier_for};

/// Execute the score command
pub fn execute(cli: &Cli, file: &Path, scores: &Path) -> Result<()> {
    let mut projects = load_projects(file)?;
    apply_score_file(&mut projects, scores)?;

    output_by_format!(cli.format,
        json => {
            let results: Vec<serde_json::Value> = projects
                .iter()
                .map(|project| {
                    let total = grand_total(&project.scores);
                    serde_json::json!({
                        "project_number": project.project_number,
                        "project_name": project.display_name(),
                        "categories": rubric()
                            .iter()
                            .map(|category| serde_json::json!({
                                "id": category.id,
                                "total": category_total(&project.scores, category),
                                "max": category.max_points,
                            }))
                            .collect::<Vec<_>>(),
                        "total": total,
                        "tier": tier_for(total as i32).label,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&results)?);
        },
        human => {
            for project in &projects {
                let total = grand_total(&project.scores);
                println!(
                    "{:>3}  {}  total={}/100  {}",
                    project.project_number,
                    project.display_name(),
                    total,
                    tier_for(total as i32).label
                );
                if cli.verbose {
                    for category in rubric() {
                        println!(
                            "       {:<32} {:>2}/{}",
                            category.name,
                            category_total(&project.scores, category),
                            category.max_points
                        );
                    }
                }
            }
        }
    );

    Ok(())
}
