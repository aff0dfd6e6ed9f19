//! `scorecard tier` command - classify a total score

use crate::cli::Cli;
use crate::output_by_format;
use scorecard_core::error::Result;
use scorecard_core::scoring::tier_for;

/// Execute the tier command
pub fn execute(cli: &Cli, score: i32) -> Result<()> {
    let tier = tier_for(score);

    output_by_format!(cli.format,
        json => {
            let output = serde_json::json!({
                "score": score,
                "tier": tier.label,
                "min": tier.min,
                "description": tier.description,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            println!("{}: {}", score, tier.label);
            if !cli.quiet {
                println!("{}", tier.description);
            }
        }
    );

    Ok(())
}
