use std::path::PathBuf;

use tempfile::TempDir;

/// A weekly plan definition starting on Monday 2024-01-01
pub const WEEKLY_PLAN_JSON: &str = r#"{
    "id": 12,
    "name": "Weekly pulse",
    "description": "Short weekly engagement survey",
    "frequency": "weekly",
    "start_date": "2024-01-01",
    "is_active": true,
    "reminder_settings": {
        "enabled": true,
        "reminder_days": [7, 3, 3],
        "auto_close_after_days": 10,
        "message_template": "Don't forget to share your feedback",
        "exclude_responded": true
    },
    "distribution_channels": ["email", "link"],
    "target_audience": ["all-employees"]
}"#;

/// Helper function to write a plan file into a temporary directory
pub fn write_plan_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let plan_path = temp_dir.path().join("plan.json");
    std::fs::write(&plan_path, contents).expect("Failed to write plan file");
    (temp_dir, plan_path)
}
