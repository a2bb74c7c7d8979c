//! Recurring survey plan and its embedded reminder configuration.

use std::collections::BTreeSet;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Channel, Frequency};

/// Shortest allowed auto-close window, in days.
pub const AUTO_CLOSE_DAYS_MIN: u32 = 1;

/// Longest allowed auto-close window, in days.
pub const AUTO_CLOSE_DAYS_MAX: u32 = 30;

/// A validated recurring-survey configuration.
///
/// Plans are only ever read by the engine. Activation, persistence and
/// archival belong to the host application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Identifier assigned by the plan repository, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Display name of the plan
    pub name: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// How often a survey is sent
    pub frequency: Frequency,

    /// Date of the first occurrence
    pub start_date: Date,

    /// Exclusive upper bound for occurrences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,

    /// Whether the host currently runs this plan
    #[serde(default)]
    pub is_active: bool,

    /// Whether question sets rotate between occurrences
    #[serde(default)]
    pub question_rotation: bool,

    /// Reminder and auto-close configuration
    pub reminder_settings: ReminderSettings,

    /// Channels each survey is distributed through
    pub distribution_channels: BTreeSet<Channel>,

    /// Audience selectors, opaque to the engine
    pub target_audience: BTreeSet<String>,
}

/// Reminder configuration embedded in a [`Plan`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReminderSettings {
    /// Whether reminders are sent at all
    pub enabled: bool,

    /// Day offsets after the send date, possibly unsorted or duplicated
    #[serde(default)]
    pub reminder_days: Vec<u32>,

    /// Number of days after the send date at which the survey closes
    pub auto_close_after_days: u32,

    /// Message template handed to the notification dispatcher
    #[serde(default)]
    pub message_template: String,

    /// Skip reminders for people who already responded
    #[serde(default)]
    pub exclude_responded: bool,
}

impl ReminderSettings {
    /// Reminder offsets that actually produce reminders.
    ///
    /// Offsets are deduplicated and sorted ascending. Zero and anything on
    /// or after the auto-close day is dropped. Disabled settings yield no
    /// offsets.
    ///
    /// ```rust
    /// use autopilot_core::models::ReminderSettings;
    ///
    /// let settings = ReminderSettings {
    ///     enabled: true,
    ///     reminder_days: vec![7, 3, 3, 10],
    ///     auto_close_after_days: 10,
    ///     message_template: String::new(),
    ///     exclude_responded: true,
    /// };
    /// assert_eq!(settings.normalized_days(), vec![3, 7]);
    /// assert_eq!(settings.max_reminders(), 2);
    /// ```
    pub fn normalized_days(&self) -> Vec<u32> {
        if !self.enabled {
            return Vec::new();
        }

        let days: BTreeSet<u32> = self
            .reminder_days
            .iter()
            .copied()
            .filter(|&day| day > 0 && day < self.auto_close_after_days)
            .collect();
        days.into_iter().collect()
    }

    /// Number of reminders each occurrence will send.
    pub fn max_reminders(&self) -> usize {
        self.normalized_days().len()
    }
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            reminder_days: vec![3, 7],
            auto_close_after_days: 14,
            message_template: String::new(),
            exclude_responded: true,
        }
    }
}
