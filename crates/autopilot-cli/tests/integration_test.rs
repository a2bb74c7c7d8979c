//! Integration tests comparing CLI output and direct Display implementations
//!
//! The CLI must print exactly what the core Display implementations produce
//! when color is disabled, so hosts embedding the engine and operators using
//! the CLI see the same report.

use std::process::Command;

use autopilot_core::{AutopilotBuilder, PlanDraft};
use jiff::civil::date;
use tempfile::TempDir;

const MONTHLY_PLAN: &str = r#"{
    "name": "Monthly engagement",
    "frequency": "monthly",
    "start_date": "2024-01-31",
    "end_date": "2024-07-01",
    "reminder_settings": {
        "enabled": true,
        "reminder_days": [5, 2],
        "auto_close_after_days": 7
    },
    "distribution_channels": ["email", "qr"],
    "target_audience": ["engineering", "product"]
}"#;

/// Run a CLI command and capture its output
fn run_cli_command(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_autopilot"))
        .arg("--no-color")
        .args(args)
        .output()
        .expect("Failed to run CLI command");
    assert!(output.status.success(), "command failed: {args:?}");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

fn create_plan_file() -> (TempDir, String) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let plan_path = temp_dir.path().join("monthly.json");
    std::fs::write(&plan_path, MONTHLY_PLAN).expect("Failed to write plan file");
    let plan_arg = plan_path.to_str().unwrap().to_string();
    (temp_dir, plan_arg)
}

#[test]
fn test_project_output_matches_schedule_display() {
    let (_temp_dir, plan_arg) = create_plan_file();

    let cli_output = run_cli_command(&["project", &plan_arg, "--until", "2024-12-31"]);

    let plan = PlanDraft::from_json(MONTHLY_PLAN)
        .and_then(PlanDraft::into_plan)
        .unwrap();
    let schedule = AutopilotBuilder::new()
        .build()
        .unwrap()
        .schedule(&plan, date(2024, 12, 31))
        .unwrap();

    assert!(cli_output.ends_with(&schedule.to_string()));
    // end_date stops the plan after the June send
    assert_eq!(schedule.len(), 6);
    assert!(cli_output.contains("### 2024-02-29 (Thu)"));
    assert!(cli_output.contains("### 2024-03-29 (Fri)"));
    assert!(cli_output.contains("### 2024-06-29 (Sat)"));
}

#[test]
fn test_preview_output_matches_preview_display() {
    let (_temp_dir, plan_arg) = create_plan_file();

    let cli_output = run_cli_command(&["preview", &plan_arg]);

    let plan = PlanDraft::from_json(MONTHLY_PLAN)
        .and_then(PlanDraft::into_plan)
        .unwrap();
    let preview = AutopilotBuilder::new()
        .build()
        .unwrap()
        .preview(&plan)
        .unwrap();

    assert_eq!(cli_output, format!("{plan}\n{preview}"));
    assert_eq!(preview.estimated_surveys, 3);
}
