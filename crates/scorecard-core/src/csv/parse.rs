//! CSV parsing: raw text to project records.
//!
//! Single forward scan with one character of lookahead. Quoted cells may
//! contain commas, escaped quotes (`""`), and embedded newlines. Malformed
//! rows are dropped, never reported; the parser is total.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::project::Project;

static ROW_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn row_number_re() -> &'static Regex {
    ROW_NUMBER_RE.get_or_init(|| Regex::new(r"^\d+$").expect("static pattern"))
}

/// Column meanings recognized in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Column {
    RowNumber,
    OwnerName,
    ProjectName,
    Symptoms,
    RootCause,
    CoreDeficit,
    ProblemStatement,
    SolutionStatement,
    MustHave,
    ShouldHave,
    CouldHave,
    WontHave,
}

/// Map a header cell to a column meaning. Rules are evaluated in order and
/// the first match wins; unmatched headers are ignored.
fn match_header(header: &str) -> Option<Column> {
    let h = header.to_lowercase();
    let h = h.trim();

    if h == "no" || h == "no." {
        Some(Column::RowNumber)
    } else if h == "your name" {
        Some(Column::OwnerName)
    } else if h.contains("project name") {
        Some(Column::ProjectName)
    } else if h.contains("symptom") {
        Some(Column::Symptoms)
    } else if h == "root cause" {
        Some(Column::RootCause)
    } else if h == "core deficit" {
        Some(Column::CoreDeficit)
    } else if h.contains("problem statement") {
        Some(Column::ProblemStatement)
    } else if h.contains("solution statement") {
        Some(Column::SolutionStatement)
    } else if h.contains("must have") {
        Some(Column::MustHave)
    } else if h == "should have" {
        Some(Column::ShouldHave)
    } else if h == "could have" {
        Some(Column::CouldHave)
    } else if h == "won't have" || h == "wont have" {
        Some(Column::WontHave)
    } else {
        None
    }
}

/// Tokenize CSV text into rows of trimmed fields.
///
/// Rows whose fields are all empty after trimming are discarded, which
/// silently drops blank lines.
fn tokenize_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped literal quote.
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => {
                    row.push(field.trim().to_string());
                    field.clear();
                }
                '\n' => flush_row(&mut rows, &mut row, &mut field),
                '\r' => {
                    // Only a \r\n pair terminates a row; a stray \r is
                    // not part of the content.
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                        flush_row(&mut rows, &mut row, &mut field);
                    }
                }
                _ => field.push(c),
            }
        }
    }

    if !field.is_empty() || !row.is_empty() {
        flush_row(&mut rows, &mut row, &mut field);
    }

    rows
}

fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, field: &mut String) {
    row.push(field.trim().to_string());
    field.clear();
    if row.iter().any(|f| !f.is_empty()) {
        rows.push(std::mem::take(row));
    } else {
        row.clear();
    }
}

fn cell<'a>(row: &'a [String], index: Option<&usize>) -> &'a str {
    index
        .and_then(|&i| row.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

/// Parse raw CSV text into project records.
///
/// Row 0 is the header; data rows need a pure-digit row number and a
/// non-empty project or owner name to be accepted. The result is sorted
/// ascending by row number.
pub fn parse_projects(text: &str) -> Vec<Project> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let rows = tokenize_rows(text);
    if rows.len() < 2 {
        return Vec::new();
    }

    let mut columns: HashMap<Column, usize> = HashMap::new();
    for (idx, header) in rows[0].iter().enumerate() {
        if let Some(column) = match_header(header) {
            columns.insert(column, idx);
        }
    }

    let mut projects = Vec::new();
    for row in &rows[1..] {
        // Without a recognized row-number column, column 0 stands in.
        let number_idx = columns.get(&Column::RowNumber).copied().unwrap_or(0);
        let number_cell = row.get(number_idx).map(String::as_str).unwrap_or("");
        let number_cell = number_cell.trim();

        if !row_number_re().is_match(number_cell) {
            continue;
        }
        let Ok(project_number) = number_cell.parse::<u32>() else {
            continue;
        };

        let mut project = Project::new(project_number);
        project.owner_name = cell(row, columns.get(&Column::OwnerName)).to_string();
        project.project_name = cell(row, columns.get(&Column::ProjectName)).to_string();
        project.symptoms = cell(row, columns.get(&Column::Symptoms)).to_string();
        project.root_cause = cell(row, columns.get(&Column::RootCause)).to_string();
        project.core_deficit = cell(row, columns.get(&Column::CoreDeficit)).to_string();
        project.problem_statement = cell(row, columns.get(&Column::ProblemStatement)).to_string();
        project.solution_statement =
            cell(row, columns.get(&Column::SolutionStatement)).to_string();
        project.must_have = cell(row, columns.get(&Column::MustHave)).to_string();
        project.should_have = cell(row, columns.get(&Column::ShouldHave)).to_string();
        project.could_have = cell(row, columns.get(&Column::CouldHave)).to_string();
        project.wont_have = cell(row, columns.get(&Column::WontHave)).to_string();

        if project.project_name.is_empty() && project.owner_name.is_empty() {
            continue;
        }

        projects.push(project);
    }

    // Stable sort keeps input order for equal row numbers.
    projects.sort_by_key(|p| p.project_number);

    debug!(
        rows = rows.len() - 1,
        accepted = projects.len(),
        "parse_projects"
    );

    projects
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "No,Your Name,Placeholder Project Name,Symptom(s),Root Cause,Core Deficit,One-line Problem Statement,One-line Solution Statement,Must Have (1-2),Should Have,Could Have,Won't Have";

    #[test]
    fn test_quoted_field_round_trip() {
        let csv = format!(
            "{}\n1,Alice,Widget,\"He said \"\"hi\"\", then\nleft\",,,,,,,,\n",
            HEADER
        );
        let projects = parse_projects(&csv);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].symptoms, "He said \"hi\", then\nleft");
    }

    #[test]
    fn test_bom_is_stripped() {
        let csv = format!("\u{feff}{}\n1,Alice,Widget,,,,,,,,,\n", HEADER);
        let projects = parse_projects(&csv);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].owner_name, "Alice");
    }

    #[test]
    fn test_crlf_line_endings() {
        let csv = format!("{}\r\n2,Bob,Gadget,,,,,,,,,\r\n", HEADER);
        let projects = parse_projects(&csv);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_number, 2);
    }

    #[test]
    fn test_stray_cr_ignored() {
        let csv = format!("{}\n1,Al\rice,Widget,,,,,,,,,\n", HEADER);
        let projects = parse_projects(&csv);
        assert_eq!(projects[0].owner_name, "Alice");
    }

    #[test]
    fn test_blank_lines_discarded() {
        let csv = format!("{}\n\n,,,,,,,,,,,\n1,Alice,Widget,,,,,,,,,\n\n", HEADER);
        let projects = parse_projects(&csv);
        assert_eq!(projects.len(), 1);
    }

    #[test]
    fn test_non_numeric_row_number_skipped() {
        let csv = format!("{}\nN/A,Alice,Widget,,,,,,,,,\n2,Bob,Gadget,,,,,,,,,\n", HEADER);
        let projects = parse_projects(&csv);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].owner_name, "Bob");
    }

    #[test]
    fn test_nameless_row_skipped() {
        let csv = format!("{}\n1,,,,,,,,,,,\n2,Bob,,,,,,,,,,\n", HEADER);
        let projects = parse_projects(&csv);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_number, 2);
    }

    #[test]
    fn test_sorted_ascending_by_row_number() {
        let csv = format!(
            "{}\n9,Zoe,Last,,,,,,,,,\n1,Ann,First,,,,,,,,,\n5,Mia,Middle,,,,,,,,,\n",
            HEADER
        );
        let numbers: Vec<u32> = parse_projects(&csv)
            .iter()
            .map(|p| p.project_number)
            .collect();
        assert_eq!(numbers, vec![1, 5, 9]);
    }

    #[test]
    fn test_header_only_yields_nothing() {
        assert!(parse_projects(HEADER).is_empty());
        assert!(parse_projects("").is_empty());
    }

    #[test]
    fn test_missing_row_number_column_falls_back_to_first() {
        let csv = "Seq,Your Name,Project Name\n3,Alice,Widget\n";
        let projects = parse_projects(csv);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_number, 3);
    }

    #[test]
    fn test_header_matching_is_case_insensitive() {
        let csv = "NO.,YOUR NAME,THE PROJECT NAME GOES HERE\n1,Alice,Widget\n";
        let projects = parse_projects(csv);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_name, "Widget");
    }

    #[test]
    fn test_unrecognized_headers_ignored() {
        let csv = "No,Your Name,Project Name,Favorite Color\n1,Alice,Widget,teal\n";
        let projects = parse_projects(csv);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_name, "Widget");
    }

    #[test]
    fn test_final_row_without_trailing_newline() {
        let csv = format!("{}\n4,Dee,Tail,,,,,,,,,", HEADER);
        let projects = parse_projects(&csv);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_number, 4);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let csv = "No,Your Name,Project Name\n1,  Alice  ,  Widget  \n";
        let projects = parse_projects(csv);
        assert_eq!(projects[0].owner_name, "Alice");
        assert_eq!(projects[0].project_name, "Widget");
    }
}
