use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const WEEKLY_PLAN: &str = r#"{
    "id": 3,
    "name": "Weekly pulse",
    "frequency": "weekly",
    "start_date": "2024-01-01",
    "is_active": true,
    "reminder_settings": {
        "enabled": true,
        "reminder_days": [7, 3, 3, 10],
        "auto_close_after_days": 10
    },
    "distribution_channels": ["email"],
    "target_audience": ["all-employees"]
}"#;

const INVALID_PLAN: &str = r#"{
    "name": " ",
    "frequency": "weekly",
    "start_date": "2024-03-01",
    "end_date": "2024-01-01",
    "reminder_settings": { "enabled": true, "reminder_days": [3], "auto_close_after_days": 10 },
    "distribution_channels": [],
    "target_audience": ["sales"]
}"#;

/// Helper function to write a plan file into a temporary directory
fn create_plan_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let plan_path = temp_dir.path().join("plan.json");
    std::fs::write(&plan_path, contents).expect("Failed to write plan file");
    (temp_dir, plan_path)
}

/// Helper function to create a Command with --no-color flag for testing
fn autopilot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("autopilot").expect("Failed to find autopilot binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_validate_valid_plan() {
    let (_temp_dir, plan_path) = create_plan_file(WEEKLY_PLAN.replace("10]", "7]").as_str());

    autopilot_cmd()
        .args(["validate", plan_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan is valid."));
}

#[test]
fn test_cli_validate_lists_every_error() {
    let (_temp_dir, plan_path) = create_plan_file(INVALID_PLAN);

    autopilot_cmd()
        .args(["validate", plan_path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("## Validation failed (3 errors)"))
        .stdout(predicate::str::contains("- name: must not be empty"))
        .stdout(predicate::str::contains("- end_date: must be after start_date"))
        .stdout(predicate::str::contains(
            "- distribution_channels: must contain at least one channel",
        ))
        .stderr(predicate::str::contains("is invalid"));
}

#[test]
fn test_cli_validate_reports_out_of_window_reminder() {
    let (_temp_dir, plan_path) = create_plan_file(WEEKLY_PLAN);

    autopilot_cmd()
        .args(["validate", plan_path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "- reminder_days: offset 10 must be less than auto_close_after_days (10)",
        ));
}

#[test]
fn test_cli_next_first_and_following() {
    let (_temp_dir, plan_path) = create_plan_file(&WEEKLY_PLAN.replace("10]", "7]"));
    let plan_arg = plan_path.to_str().unwrap();

    autopilot_cmd()
        .args(["next", plan_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("## First survey of Weekly pulse"))
        .stdout(predicate::str::contains("### 2024-01-01 (Mon)"))
        .stdout(predicate::str::contains(
            "- Reminders: 2024-01-04 (Thu), 2024-01-08 (Mon)",
        ))
        .stdout(predicate::str::contains("- Closes: 2024-01-11 (Thu)"));

    autopilot_cmd()
        .args(["next", plan_arg, "--from", "2024-01-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("after 2024-01-29"))
        .stdout(predicate::str::contains("### 2024-02-05 (Mon)"));
}

#[test]
fn test_cli_refuses_invalid_plan() {
    let (_temp_dir, plan_path) = create_plan_file(INVALID_PLAN);

    autopilot_cmd()
        .args(["next", plan_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not valid"));
}

#[test]
fn test_cli_project_schedule() {
    let (_temp_dir, plan_path) = create_plan_file(&WEEKLY_PLAN.replace("10]", "7]"));

    autopilot_cmd()
        .args([
            "project",
            plan_path.to_str().unwrap(),
            "--until",
            "2024-04-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Weekly pulse until 2024-04-01"))
        .stdout(predicate::str::contains("### 2024-03-25 (Mon)"))
        .stdout(predicate::str::contains("### 2024-04-01 (Mon)"))
        .stdout(predicate::str::contains("### 2024-04-08").not())
        .stdout(predicate::str::contains("truncated").not());
}

#[test]
fn test_cli_project_truncation_warning() {
    let (_temp_dir, plan_path) = create_plan_file(&WEEKLY_PLAN.replace("10]", "7]"));

    autopilot_cmd()
        .args([
            "--max-occurrences",
            "2",
            "project",
            plan_path.to_str().unwrap(),
            "--until",
            "2025-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 2024-01-08 (Mon)"))
        .stdout(predicate::str::contains(
            "> Projection truncated after 2 occurrences.",
        ));
}

#[test]
fn test_cli_preview() {
    let (_temp_dir, plan_path) = create_plan_file(&WEEKLY_PLAN.replace("10]", "7]"));

    autopilot_cmd()
        .args(["preview", plan_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 3. Weekly pulse"))
        .stdout(predicate::str::contains("## Preview: Weekly pulse"))
        .stdout(predicate::str::contains(
            "- **Estimated surveys** (next 90 days): 13",
        ))
        .stdout(predicate::str::contains("- **Reminders per survey**: 2"));

    autopilot_cmd()
        .args([
            "--horizon-days",
            "14",
            "preview",
            plan_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- **Estimated surveys** (next 14 days): 2",
        ));
}

#[test]
fn test_cli_reminders_normalizes_offsets() {
    autopilot_cmd()
        .args([
            "reminders",
            "2024-01-01",
            "--days",
            "7,3,3,10",
            "--close-after",
            "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Reminders: 2024-01-04 (Thu), 2024-01-08 (Mon)",
        ))
        .stdout(predicate::str::contains("- Closes: 2024-01-11 (Thu)"));
}

#[test]
fn test_cli_reminders_rejects_close_window_out_of_range() {
    autopilot_cmd()
        .args(["reminders", "2024-01-01", "--days", "3", "--close-after", "31"])
        .assert()
        .failure();
}

#[test]
fn test_cli_frequencies() {
    autopilot_cmd()
        .arg("frequencies")
        .assert()
        .success()
        .stdout(predicate::str::contains("- biweekly: Every 2 weeks"))
        .stdout(predicate::str::contains("- quarterly: Quarterly"));
}

#[test]
fn test_cli_missing_plan_file() {
    autopilot_cmd()
        .args(["validate", "/nonexistent/plan.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read plan file"));
}

#[test]
fn test_cli_invalid_date_argument() {
    let (_temp_dir, plan_path) = create_plan_file(WEEKLY_PLAN);

    autopilot_cmd()
        .args([
            "project",
            plan_path.to_str().unwrap(),
            "--until",
            "2024-02-30",
        ])
        .assert()
        .failure();
}
