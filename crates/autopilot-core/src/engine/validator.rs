//! Plan validator: structural rules a plan must satisfy before the engine
//! operates on it.
//!
//! Every rule is checked on every call and all violations are reported
//! together, so an editor can show the complete list at once.

use std::collections::BTreeSet;

use crate::{
    models::{
        Channel, Frequency, Plan, ValidationError, ValidationResult, AUTO_CLOSE_DAYS_MAX,
        AUTO_CLOSE_DAYS_MIN,
    },
    params::{PlanDraft, ReminderDraft},
};

/// Validates a plan draft, collecting every violation.
///
/// # Examples
///
/// ```rust
/// use autopilot_core::{engine::validator::validate, params::PlanDraft};
///
/// let report = validate(&PlanDraft::default());
/// assert!(!report.valid);
/// assert!(report.has_error_for("name"));
/// assert!(report.has_error_for("start_date"));
/// ```
pub fn validate(draft: &PlanDraft) -> ValidationResult {
    let mut errors = Vec::new();

    check_name(draft, &mut errors);
    check_frequency(draft, &mut errors);
    check_dates(draft, &mut errors);
    check_reminders(&draft.reminder_settings, &mut errors);
    check_channels(draft, &mut errors);
    check_audience(draft, &mut errors);

    ValidationResult::from_errors(errors)
}

/// Validates an already typed plan against the same rules.
pub fn validate_plan(plan: &Plan) -> ValidationResult {
    validate(&PlanDraft::from(plan))
}

fn check_name(draft: &PlanDraft, errors: &mut Vec<ValidationError>) {
    if draft.name.trim().is_empty() {
        errors.push(ValidationError::new("name", "must not be empty"));
    }
}

fn check_frequency(draft: &PlanDraft, errors: &mut Vec<ValidationError>) {
    if draft.frequency.parse::<Frequency>().is_err() {
        errors.push(ValidationError::new(
            "frequency",
            format!(
                "unrecognized value '{}', expected one of: {}",
                draft.frequency,
                Frequency::expected_values()
            ),
        ));
    }
}

fn check_dates(draft: &PlanDraft, errors: &mut Vec<ValidationError>) {
    match (draft.start_date, draft.end_date) {
        (None, _) => errors.push(ValidationError::new("start_date", "is required")),
        (Some(start), Some(end)) if end <= start => errors.push(ValidationError::new(
            "end_date",
            format!("must be after start_date ({start})"),
        )),
        _ => {}
    }
}

fn check_reminders(reminders: &ReminderDraft, errors: &mut Vec<ValidationError>) {
    let close = reminders.auto_close_after_days;
    let close_range = i64::from(AUTO_CLOSE_DAYS_MIN)..=i64::from(AUTO_CLOSE_DAYS_MAX);
    if !close_range.contains(&close) {
        errors.push(ValidationError::new(
            "auto_close_after_days",
            format!("must be between {AUTO_CLOSE_DAYS_MIN} and {AUTO_CLOSE_DAYS_MAX} days, got {close}"),
        ));
    }

    let mut reported = BTreeSet::new();
    for &day in &reminders.reminder_days {
        if !reported.insert(day) {
            continue;
        }
        if day <= 0 {
            errors.push(ValidationError::new(
                "reminder_days",
                format!("offset {day} must be a positive number of days"),
            ));
        } else if day >= close {
            errors.push(ValidationError::new(
                "reminder_days",
                format!("offset {day} must be less than auto_close_after_days ({close})"),
            ));
        }
    }
}

fn check_channels(draft: &PlanDraft, errors: &mut Vec<ValidationError>) {
    if draft.distribution_channels.is_empty() {
        errors.push(ValidationError::new(
            "distribution_channels",
            "must contain at least one channel",
        ));
        return;
    }

    let mut reported = BTreeSet::new();
    for channel in &draft.distribution_channels {
        if channel.parse::<Channel>().is_err() && reported.insert(channel.as_str()) {
            let expected: Vec<&str> = Channel::ALL.iter().map(Channel::as_str).collect();
            errors.push(ValidationError::new(
                "distribution_channels",
                format!(
                    "unrecognized channel '{channel}', expected one of: {}",
                    expected.join(", ")
                ),
            ));
        }
    }
}

fn check_audience(draft: &PlanDraft, errors: &mut Vec<ValidationError>) {
    if draft
        .target_audience
        .iter()
        .all(|selector| selector.trim().is_empty())
    {
        errors.push(ValidationError::new(
            "target_audience",
            "must contain at least one audience selector",
        ));
    }
}
