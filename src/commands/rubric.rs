//! `scorecard rubric` command - print the rubric reference

use crate::cli::Cli;
use crate::output_by_format;
use scorecard_core::error::Result;
use scorecard_core::rubric::rubric;
use scorecard_core::scoring::TIERS;

/// Execute the rubric command
pub fn execute(cli: &Cli) -> Result<()> {
    output_by_format!(cli.format,
        json => {
            let categories: Vec<serde_json::Value> = rubric()
                .iter()
                .map(|category| {
                    serde_json::json!({
                        "id": category.id,
                        "name": category.name,
                        "max_points": category.max_points,
                        "description": category.description,
                        "subcriteria": category
                            .subcriteria
                            .iter()
                            .map(|sub| serde_json::json!({
                                "id": sub.id,
                                "name": sub.name,
                                "max": sub.max,
                                "description": sub.description,
                                "excellent": sub.excellent,
                                "weak": sub.weak,
                            }))
                            .collect::<Vec<_>>(),
                    })
                })
                .collect();
            let tiers: Vec<serde_json::Value> = TIERS
                .iter()
                .map(|tier| {
                    serde_json::json!({
                        "min": tier.min,
                        "label": tier.label,
                        "description": tier.description,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "categories": categories,
                "tiers": tiers,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            for category in rubric() {
                println!("{} [{} pts]", category.name, category.max_points);
                println!("  {}", category.description);
                for sub in &category.subcriteria {
                    println!("  - {} ({}, max {})", sub.name, sub.id, sub.max);
                    println!("      {}", sub.description);
                    if cli.verbose {
                        println!("      Excellent: {}", sub.excellent);
                        println!("      Weak: {}", sub.weak);
                    }
                }
                println!();
            }
            println!("Tiers:");
            for tier in &TIERS {
                println!("  {:>3}+  {:<16}  {}", tier.min, tier.label, tier.description);
            }
        }
    );

    Ok(())
}
