//! Integration tests for the scorecard CLI
//!
//! These tests run the scorecard binary against small fixture files.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Get a Command for scorecard
fn scorecard() -> Command {
    Command::cargo_bin("scorecard").unwrap()
}

const SAMPLE_CSV: &str = "No.,Your Name,Project Name,Symptoms,Root Cause\n\
    1,Dana,Parts Finder,\"Procurement teams spend 40+ hours/month\",Manual phone calls\n\
    2,Riley,Invoice Bot,Late invoices,No reminders\n\
    x,Nobody,Ghost Project,skipped,skipped\n";

fn write_fixture(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    scorecard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: scorecard"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("ai-score"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_version_flag() {
    scorecard()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scorecard"));
}

#[test]
fn test_no_command_is_usage_error() {
    scorecard()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no command given"));
}

#[test]
fn test_unknown_argument_json_envelope() {
    scorecard()
        .args(["--format", "json", "--bogus"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

// ============================================================================
// import
// ============================================================================

#[test]
fn test_import_lists_accepted_projects() {
    let (_dir, csv) = write_fixture("projects.csv", SAMPLE_CSV);

    scorecard()
        .arg("import")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 project(s)"))
        .stdout(predicate::str::contains("Parts Finder (Dana)"))
        .stdout(predicate::str::contains("Invoice Bot (Riley)"))
        .stdout(predicate::str::contains("Ghost Project").not());
}

#[test]
fn test_import_json_output() {
    let (_dir, csv) = write_fixture("projects.csv", SAMPLE_CSV);

    let output = scorecard()
        .args(["--format", "json", "import"])
        .arg(&csv)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["count"], 2);
    assert_eq!(parsed["projects"][0]["project_number"], 1);
    assert_eq!(parsed["projects"][1]["project_name"], "Invoice Bot");
}

#[test]
fn test_import_missing_file_fails() {
    scorecard()
        .args(["import", "/nonexistent/projects.csv"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

// ============================================================================
// rubric and tier
// ============================================================================

#[test]
fn test_rubric_human_output() {
    scorecard()
        .arg("rubric")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Problem + ICP Clarity [15 pts]"))
        .stdout(predicate::str::contains("8. Defensibility [5 pts]"))
        .stdout(predicate::str::contains("STRONG CONTENDER"))
        .stdout(predicate::str::contains("NOT READY"));
}

#[test]
fn test_rubric_json_totals_100() {
    let output = scorecard()
        .args(["--format", "json", "rubric"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let categories = parsed["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 8);
    let total: u64 = categories
        .iter()
        .map(|c| c["max_points"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 100);
    assert_eq!(parsed["tiers"].as_array().unwrap().len(), 5);
}

#[test]
fn test_tier_boundaries() {
    for (score, label) in [
        ("85", "STRONG CONTENDER"),
        ("84", "COMPETITIVE"),
        ("0", "NOT READY"),
        ("100", "STRONG CONTENDER"),
    ] {
        scorecard()
            .args(["tier", score])
            .assert()
            .success()
            .stdout(predicate::str::contains(label));
    }
}

#[test]
fn test_tier_json() {
    let output = scorecard()
        .args(["--format", "json", "tier", "72"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["tier"], "COMPETITIVE");
    assert_eq!(parsed["min"], 70);
}

// ============================================================================
// score
// ============================================================================

#[test]
fn test_score_reports_totals_and_tiers() {
    let (dir, csv) = write_fixture("projects.csv", SAMPLE_CSV);
    let scores = dir.path().join("scores.json");
    fs::write(
        &scores,
        r#"{"1": {"problem_severity": 5, "icp_specificity": 4}, "2": {"ai_autonomy": 8}}"#,
    )
    .unwrap();

    scorecard()
        .arg("score")
        .arg(&csv)
        .arg("--scores")
        .arg(&scores)
        .assert()
        .success()
        .stdout(predicate::str::contains("Parts Finder  total=9/100  NOT READY"))
        .stdout(predicate::str::contains("Invoice Bot  total=8/100  NOT READY"));
}

#[test]
fn test_score_unknown_project_is_data_error() {
    let (dir, csv) = write_fixture("projects.csv", SAMPLE_CSV);
    let scores = dir.path().join("scores.json");
    fs::write(&scores, r#"{"99": {"problem_severity": 5}}"#).unwrap();

    scorecard()
        .arg("score")
        .arg(&csv)
        .arg("--scores")
        .arg(&scores)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("project not found: 99"));
}

#[test]
fn test_score_unknown_criterion_fails() {
    let (dir, csv) = write_fixture("projects.csv", SAMPLE_CSV);
    let scores = dir.path().join("scores.json");
    fs::write(&scores, r#"{"1": {"vibes": 5}}"#).unwrap();

    scorecard()
        .arg("score")
        .arg(&csv)
        .arg("--scores")
        .arg(&scores)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("JSON error"));
}

// ============================================================================
// ai-score
// ============================================================================

#[test]
fn test_ai_score_without_credential_fails() {
    let (_dir, csv) = write_fixture("projects.csv", SAMPLE_CSV);

    scorecard()
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("SCORECARD_API_KEY")
        .arg("ai-score")
        .arg(&csv)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no API key configured"));
}

#[test]
fn test_ai_score_unknown_project_fails_before_request() {
    let (_dir, csv) = write_fixture("projects.csv", SAMPLE_CSV);

    scorecard()
        .env("ANTHROPIC_API_KEY", "test-key")
        .args(["ai-score"])
        .arg(&csv)
        .args(["--project", "99"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("project not found: 99"));
}

// ============================================================================
// export
// ============================================================================

#[test]
fn test_export_ranks_by_manual_total() {
    let (dir, csv) = write_fixture("projects.csv", SAMPLE_CSV);
    let scores = dir.path().join("scores.json");
    fs::write(
        &scores,
        r#"{"1": {"problem_severity": 2}, "2": {"problem_severity": 5}}"#,
    )
    .unwrap();

    let output = scorecard()
        .arg("export")
        .arg(&csv)
        .arg("--scores")
        .arg(&scores)
        .output()
        .unwrap();
    assert!(output.status.success());

    let csv_text = String::from_utf8_lossy(&output.stdout);
    let mut lines = csv_text.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("\"Rank\",\"Project\",\"Owner\""));

    let first = lines.next().unwrap();
    let second = lines.next().unwrap();
    assert!(first.contains("\"Invoice Bot\""));
    assert!(second.contains("\"Parts Finder\""));
    assert!(first.contains("\"Not Scored\""));
}

#[test]
fn test_export_to_file() {
    let (dir, csv) = write_fixture("projects.csv", SAMPLE_CSV);
    let out = dir.path().join("rankings.csv");

    scorecard()
        .arg("export")
        .arg(&csv)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 project(s)"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.lines().count() == 3);
    assert!(written.contains("\"AI Reasoning: Moat Evidence\""));
}

#[test]
fn test_export_applies_ai_file() {
    let (dir, csv) = write_fixture("projects.csv", SAMPLE_CSV);
    let ai = dir.path().join("ai.json");
    fs::write(
        &ai,
        r#"{"1": {"scores": {"problem_severity": 5}, "reasoning": {"problem_severity": "quantified pain"}}}"#,
    )
    .unwrap();

    let output = scorecard()
        .arg("export")
        .arg(&csv)
        .arg("--ai")
        .arg(&ai)
        .output()
        .unwrap();
    assert!(output.status.success());

    let csv_text = String::from_utf8_lossy(&output.stdout);
    assert!(csv_text.contains("\"quantified pain\""));
    assert!(csv_text.contains("\"NOT READY\""));
}

// ============================================================================
// quoted multi-line fields survive import
// ============================================================================

#[test]
fn test_import_multiline_quoted_field() {
    let csv_text = "No.,Your Name,Project Name,Symptoms\n\
        1,Dana,Parts Finder,\"He said \"\"hi\"\", then\nleft\"\n";
    let (_dir, csv) = write_fixture("projects.csv", csv_text);

    let output = scorecard()
        .args(["--format", "json", "import"])
        .arg(&csv)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["count"], 1);
    assert_eq!(
        parsed["projects"][0]["symptoms"],
        "He said \"hi\", then\nleft"
    );
}
