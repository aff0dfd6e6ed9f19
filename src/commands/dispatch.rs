//! Command dispatch logic for scorecard

use crate::cli::{Cli, Commands};
use crate::commands;
use scorecard_core::error::{Result, ScorecardError};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => Err(ScorecardError::UsageError(
            "no command given; run `scorecard --help` for usage".to_string(),
        )),

        Some(Commands::Import { file }) => commands::import::execute(cli, file),

        Some(Commands::Rubric) => commands::rubric::execute(cli),

        Some(Commands::Tier { score }) => commands::tier::execute(cli, *score),

        Some(Commands::Score { file, scores }) => commands::score::execute(cli, file, scores),

        Some(Commands::AiScore { file, project, out }) => {
            commands::ai::execute(cli, file, *project, out.as_deref())
        }

        Some(Commands::Export {
            file,
            scores,
            ai,
            output,
        }) => commands::export::execute(
            cli,
            file,
            scores.as_deref(),
            ai.as_deref(),
            output.as_deref(),
        ),
    }
}
