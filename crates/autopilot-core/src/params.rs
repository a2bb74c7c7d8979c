//! Parameter structures for autopilot operations
//!
//! This module contains the raw input structures shared by every host of
//! the engine (CLI, dashboard backend, scheduler tick). They mirror what a
//! plan editor or a JSON document can carry, including values the typed
//! [`Plan`] model cannot represent, so the validator can report every
//! problem instead of failing at parse time.
//!
//! ## Architecture: Draft to Plan
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   JSON / CLI    │    │   PlanDraft     │    │      Plan       │
//! │  (serde/clap)   │───▶│ (raw strings,   │───▶│ (closed enums,  │
//! │                 │    │  signed ints)   │    │  validated)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                             validate()           into_plan()
//! ```
//!
//! Interface layers build a [`PlanDraft`] and call
//! [`PlanDraft::into_plan`], which runs the validator and only returns a
//! [`Plan`] when no rule is violated.

use std::{collections::BTreeSet, fs, path::Path};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    engine::validator,
    error::{AutopilotError, Result},
    models::{Channel, Frequency, Plan, ReminderSettings},
};

/// Unvalidated plan definition as supplied by an editor or a plan file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanDraft {
    /// Identifier assigned by the plan repository
    #[serde(default)]
    pub id: Option<u64>,
    /// Display name (required, non-blank)
    #[serde(default)]
    pub name: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Frequency as free text, one of daily, weekly, biweekly, monthly,
    /// quarterly
    #[serde(default)]
    pub frequency: String,
    /// Date of the first occurrence (required)
    #[serde(default)]
    pub start_date: Option<Date>,
    /// Exclusive upper bound for occurrences
    #[serde(default)]
    pub end_date: Option<Date>,
    /// Whether the host currently runs this plan
    #[serde(default)]
    pub is_active: bool,
    /// Whether question sets rotate between occurrences
    #[serde(default)]
    pub question_rotation: bool,
    /// Reminder configuration
    #[serde(default)]
    pub reminder_settings: ReminderDraft,
    /// Channels as free text, drawn from email, link, qr
    #[serde(default)]
    pub distribution_channels: Vec<String>,
    /// Audience selectors
    #[serde(default)]
    pub target_audience: Vec<String>,
}

/// Unvalidated reminder configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReminderDraft {
    /// Whether reminders are sent at all, on unless switched off
    #[serde(default = "reminders_enabled_by_default")]
    pub enabled: bool,
    /// Day offsets after the send date
    #[serde(default)]
    pub reminder_days: Vec<i64>,
    /// Days after the send date at which the survey closes
    pub auto_close_after_days: i64,
    /// Message template for the notification dispatcher
    #[serde(default)]
    pub message_template: String,
    /// Skip reminders for people who already responded
    #[serde(default)]
    pub exclude_responded: bool,
}

impl Default for ReminderDraft {
    fn default() -> Self {
        ReminderSettings::default().into()
    }
}

fn reminders_enabled_by_default() -> bool {
    ReminderSettings::default().enabled
}

impl PlanDraft {
    /// Parse a draft from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a draft from a JSON plan file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| AutopilotError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    /// Validate the draft and convert it into a typed [`Plan`].
    ///
    /// # Errors
    ///
    /// Returns `AutopilotError::InvalidPlan` carrying the full validation
    /// report when any rule is violated.
    pub fn into_plan(self) -> Result<Plan> {
        let report = validator::validate(&self);
        if !report.valid {
            return Err(AutopilotError::InvalidPlan { report });
        }

        let frequency: Frequency = self.frequency.parse()?;
        let start_date = self
            .start_date
            .ok_or_else(|| AutopilotError::configuration("start_date is required"))?;

        let distribution_channels = self
            .distribution_channels
            .iter()
            .map(|channel| channel.parse::<Channel>())
            .collect::<std::result::Result<BTreeSet<_>, _>>()
            .map_err(AutopilotError::configuration)?;

        let reminder_days = self
            .reminder_settings
            .reminder_days
            .iter()
            .map(|&day| u32::try_from(day))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| AutopilotError::configuration(format!("reminder_days: {e}")))?;
        let auto_close_after_days = u32::try_from(self.reminder_settings.auto_close_after_days)
            .map_err(|e| AutopilotError::configuration(format!("auto_close_after_days: {e}")))?;

        Ok(Plan {
            id: self.id,
            name: self.name.trim().to_string(),
            description: self.description,
            frequency,
            start_date,
            end_date: self.end_date,
            is_active: self.is_active,
            question_rotation: self.question_rotation,
            reminder_settings: ReminderSettings {
                enabled: self.reminder_settings.enabled,
                reminder_days,
                auto_close_after_days,
                message_template: self.reminder_settings.message_template,
                exclude_responded: self.reminder_settings.exclude_responded,
            },
            distribution_channels,
            target_audience: self
                .target_audience
                .into_iter()
                .map(|selector| selector.trim().to_string())
                .filter(|selector| !selector.is_empty())
                .collect(),
        })
    }
}

impl From<ReminderSettings> for ReminderDraft {
    fn from(settings: ReminderSettings) -> Self {
        ReminderDraft {
            enabled: settings.enabled,
            reminder_days: settings.reminder_days.into_iter().map(i64::from).collect(),
            auto_close_after_days: i64::from(settings.auto_close_after_days),
            message_template: settings.message_template,
            exclude_responded: settings.exclude_responded,
        }
    }
}

impl From<&Plan> for PlanDraft {
    fn from(plan: &Plan) -> Self {
        PlanDraft {
            id: plan.id,
            name: plan.name.clone(),
            description: plan.description.clone(),
            frequency: plan.frequency.as_str().to_string(),
            start_date: Some(plan.start_date),
            end_date: plan.end_date,
            is_active: plan.is_active,
            question_rotation: plan.question_rotation,
            reminder_settings: plan.reminder_settings.clone().into(),
            distribution_channels: plan
                .distribution_channels
                .iter()
                .map(|channel| channel.as_str().to_string())
                .collect(),
            target_audience: plan.target_audience.iter().cloned().collect(),
        }
    }
}

/// Parameters for scheduling reminders of a single send outside a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderQuery {
    /// Date the survey is sent
    pub occurrence_date: Date,
    /// Day offsets after the send date
    #[serde(default)]
    pub reminder_days: Vec<u32>,
    /// Days after the send date at which the survey closes
    pub auto_close_after_days: u32,
}

impl ReminderQuery {
    /// Reminder settings equivalent to this query, with reminders enabled.
    pub fn settings(&self) -> ReminderSettings {
        ReminderSettings {
            enabled: true,
            reminder_days: self.reminder_days.clone(),
            auto_close_after_days: self.auto_close_after_days,
            message_template: String::new(),
            exclude_responded: false,
        }
    }
}
