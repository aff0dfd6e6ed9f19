//! `scorecard ai-score` command - score projects with the AI judge
//!
//! One request per project against the configured endpoint. Results go to
//! stdout or, with --out, to a JSON file that `export --ai` accepts.

use std::fs;
use std::path::Path;

use crate::cli::Cli;
use crate::commands::helpers::{load_projects, AiFile};
use crate::output_by_format;
use scorecard_core::ai::AiClient;
use scorecard_core::config::AiConfig;
use scorecard_core::error::Result;
use scorecard_core::scoring::{grand_total, tier_for};
use scorecard_core::session::Session;

/// Execute the ai-score command
pub fn execute(cli: &Cli, file: &Path, project: Option<u32>, out: Option<&Path>) -> Result<()> {
    let projects = load_projects(file)?;

    let mut session = Session::new();
    session.import(projects);

    let targets: Vec<u32> = match project {
        Some(number) => {
            // Fail before spending a request on an unknown number.
            session.project(number)?;
            vec![number]
        }
        None => session.projects().iter().map(|p| p.project_number).collect(),
    };

    let config = AiConfig::from_env()?;
    let client = AiClient::new(config);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut results = AiFile::new();
    for number in targets {
        let token = session.begin_ai_scoring(number)?;
        if cli.verbose && cli.format == crate::cli::OutputFormat::Human {
            eprintln!("scoring project {}...", number);
        }

        let project = session.project(number)?.clone();
        match runtime.block_on(client.score_project(&project)) {
            Ok(outcome) => {
                session.complete_ai_scoring(number, token, outcome.clone())?;
                results.insert(number, outcome);
            }
            Err(e) => {
                session.fail_ai_scoring(number, token)?;
                return Err(e);
            }
        }
    }

    if let Some(path) = out {
        fs::write(path, serde_json::to_string_pretty(&results)?)?;
    }

    output_by_format!(cli.format,
        json => {
            if out.is_none() {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                let output = serde_json::json!({
                    "status": "ok",
                    "scored": results.len(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        },
        human => {
            for (number, outcome) in &results {
                let total = grand_total(&outcome.scores);
                let name = session
                    .project(*number)
                    .map(|p| p.display_name())
                    .unwrap_or_else(|_| format!("Project {}", number));
                println!(
                    "{:>3}  {}  ai_total={}/100  {}",
                    number,
                    name,
                    total,
                    tier_for(total as i32).label
                );
            }
            if let Some(path) = out {
                if !cli.quiet {
                    println!("Wrote AI scores to {}", path.display());
                }
            }
        }
    );

    Ok(())
}
