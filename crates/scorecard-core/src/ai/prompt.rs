//! Prompt construction for AI scoring.

use std::fmt::Write as _;

use crate::project::Project;
use crate::rubric::{rubric, subcriteria};

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn project_context(project: &Project) -> String {
    format!(
        "Project Name: {}\n\
         Owner: {}\n\
         Symptoms: {}\n\
         Root Cause: {}\n\
         Core Deficit: {}\n\
         Problem Statement: {}\n\
         Solution Statement: {}\n\
         Must Have Features: {}\n\
         Should Have Features: {}\n\
         Could Have Features: {}\n\
         Won't Have Features: {}\n",
        or_placeholder(&project.project_name, "Unknown"),
        or_placeholder(&project.owner_name, "Unknown"),
        or_placeholder(&project.symptoms, "Not provided"),
        or_placeholder(&project.root_cause, "Not provided"),
        or_placeholder(&project.core_deficit, "Not provided"),
        or_placeholder(&project.problem_statement, "Not provided"),
        or_placeholder(&project.solution_statement, "Not provided"),
        or_placeholder(&project.must_have, "Not provided"),
        or_placeholder(&project.should_have, "Not provided"),
        or_placeholder(&project.could_have, "Not provided"),
        or_placeholder(&project.wont_have, "Not provided"),
    )
}

fn rubric_context() -> String {
    let mut out = String::new();
    for category in rubric() {
        let _ = writeln!(
            out,
            "{} ({} points total):",
            category.name, category.max_points
        );
        for sub in &category.subcriteria {
            let _ = writeln!(
                out,
                "  - {} (max {} points): {}\n    Excellent: {}\n    Weak: {}",
                sub.name, sub.max, sub.description, sub.excellent, sub.weak
            );
        }
        out.push('\n');
    }
    out
}

/// Build the scoring prompt for one project.
///
/// The reply contract is a JSON array with exactly one object per
/// subcriterion, in rubric order, each carrying `id`, an integer `score`,
/// and `reasoning`. Missing project information is to be penalized, not
/// guessed around.
pub fn build_scoring_prompt(project: &Project) -> String {
    let criterion_count = subcriteria().count();
    let criterion_list = subcriteria()
        .map(|sub| format!("- {} (max: {})", sub.id, sub.max))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert judge for an AI automation MVP competition. \
         Evaluate this project based on the provided rubric.\n\n\
         PROJECT DETAILS:\n{project_context}\n\
         SCORING RUBRIC:\n{rubric_context}\
         IMPORTANT: Score ONLY based on the information provided. If \
         information is missing for a criterion, give a lower score and \
         note that in your reasoning.\n\n\
         For each of the following {criterion_count} criteria, provide a \
         JSON object with:\n\
         - \"id\": the criterion id\n\
         - \"score\": integer score (0 to max for that criterion)\n\
         - \"reasoning\": 1-2 sentence explanation for the score\n\n\
         Respond with a JSON array containing exactly {criterion_count} \
         objects, one for each criterion in this exact order:\n\
         {criterion_list}\n\n\
         Return ONLY the JSON array, no other text.",
        project_context = project_context(project),
        rubric_context = rubric_context(),
    )
}
