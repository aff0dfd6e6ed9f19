//! Rankings CSV export.
//!
//! Every cell is double-quoted and embedded quotes are doubled, so
//! rationale text with commas, quotes, or newlines survives a round trip.

use crate::project::Project;
use crate::rubric::{rubric, subcriteria};
use crate::scoring::{category_total, grand_total, tier_for};

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn header_row() -> Vec<String> {
    let mut headers = vec![
        "Rank".to_string(),
        "Project".to_string(),
        "Owner".to_string(),
        "Manual Score".to_string(),
        "Manual Tier".to_string(),
        "AI Score".to_string(),
        "AI Tier".to_string(),
    ];
    for category in rubric() {
        headers.push(format!("{} (Manual)", category.name));
        headers.push(format!("{} (AI)", category.name));
    }
    for sub in subcriteria() {
        headers.push(format!("AI Reasoning: {}", sub.name));
    }
    headers
}

fn project_row(rank: usize, project: &Project) -> Vec<String> {
    let manual_total = grand_total(&project.scores);
    let ai_total = grand_total(&project.ai_scores);

    let ai_tier = if ai_total > 0 {
        tier_for(ai_total as i32).label.to_string()
    } else {
        "Not Scored".to_string()
    };

    let mut row = vec![
        rank.to_string(),
        project.display_name(),
        project.owner_name.clone(),
        manual_total.to_string(),
        tier_for(manual_total as i32).label.to_string(),
        ai_total.to_string(),
        ai_tier,
    ];
    for category in rubric() {
        row.push(category_total(&project.scores, category).to_string());
        row.push(category_total(&project.ai_scores, category).to_string());
    }
    for sub in subcriteria() {
        row.push(
            project
                .ai_reasoning
                .get(&sub.id)
                .cloned()
                .unwrap_or_default(),
        );
    }
    row
}

/// Render the rankings CSV: header row, then one row per project ordered by
/// descending manual grand total.
pub fn export_rankings(projects: &[Project]) -> String {
    let mut ranked: Vec<&Project> = projects.iter().collect();
    // Stable sort keeps the incoming order for tied totals.
    ranked.sort_by_key(|p| std::cmp::Reverse(grand_total(&p.scores)));

    let mut lines = Vec::with_capacity(ranked.len() + 1);
    lines.push(
        header_row()
            .iter()
            .map(|cell| quote(cell))
            .collect::<Vec<_>>()
            .join(","),
    );
    for (idx, project) in ranked.iter().enumerate() {
        lines.push(
            project_row(idx + 1, project)
                .iter()
                .map(|cell| quote(cell))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::SubcriterionId;

    fn project(number: u32, name: &str, manual: u32) -> Project {
        let mut p = Project::new(number);
        p.project_name = name.to_string();
        p.owner_name = format!("Owner {}", number);
        if manual > 0 {
            p.scores.insert(SubcriterionId::ProblemSeverity, manual);
        }
        p
    }

    #[test]
    fn test_every_cell_is_quoted() {
        let csv = export_rankings(&[project(1, "Widget", 3)]);
        for line in csv.lines() {
            assert!(line.starts_with('"'));
            assert!(line.ends_with('"'));
        }
    }

    #[test]
    fn test_ordered_by_descending_manual_total() {
        let csv = export_rankings(&[
            project(1, "Low", 1),
            project(2, "High", 5),
            project(3, "Mid", 3),
        ]);
        let rows: Vec<&str> = csv.lines().skip(1).collect();
        assert!(rows[0].contains("\"High\""));
        assert!(rows[1].contains("\"Mid\""));
        assert!(rows[2].contains("\"Low\""));
        assert!(rows[0].starts_with("\"1\""));
        assert!(rows[2].starts_with("\"3\""));
    }

    #[test]
    fn test_unscored_ai_shows_not_scored() {
        let csv = export_rankings(&[project(1, "Widget", 2)]);
        assert!(csv.contains("\"Not Scored\""));
    }

    #[test]
    fn test_reasoning_quotes_are_doubled() {
        let mut p = project(1, "Widget", 2);
        p.ai_scores.insert(SubcriterionId::ProblemSeverity, 4);
        p.ai_reasoning.insert(
            SubcriterionId::ProblemSeverity,
            "Claims \"40 hours saved\" with evidence".to_string(),
        );
        let csv = export_rankings(&[p]);
        assert!(csv.contains("\"Claims \"\"40 hours saved\"\" with evidence\""));
    }

    #[test]
    fn test_header_covers_categories_and_subcriteria() {
        let csv = export_rankings(&[]);
        let header = csv.lines().next().unwrap();
        assert!(header.contains("\"Rank\""));
        assert!(header.contains("1. Problem + ICP Clarity (Manual)"));
        assert!(header.contains("8. Defensibility (AI)"));
        assert!(header.contains("AI Reasoning: Moat Evidence"));
        // 7 fixed columns + 2 per category + 1 per subcriterion.
        assert_eq!(header.matches("\",\"").count() + 1, 7 + 16 + 21);
    }

    #[test]
    fn test_ai_tier_label_when_scored() {
        let mut p = project(1, "Widget", 2);
        for sub in crate::rubric::subcriteria() {
            p.ai_scores.insert(sub.id, sub.max);
        }
        let csv = export_rankings(&[p]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"STRONG CONTENDER\""));
        assert!(row.contains("\"100\""));
    }
}
