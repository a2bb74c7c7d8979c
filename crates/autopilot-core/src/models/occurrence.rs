//! Computed values produced by the engine.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Frequency;

/// One concrete send of a plan's survey.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Occurrence {
    /// Plan the occurrence belongs to, absent for unsaved plans
    pub plan_id: Option<u64>,

    /// Date the survey is sent
    pub scheduled_date: Date,

    /// Reminder firing dates, earliest first
    pub reminder_dates: Vec<Date>,

    /// Date after which responses are no longer accepted
    pub auto_close_date: Date,
}

/// Occurrence dates of a plan up to a bound.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Projection {
    /// Occurrence dates, strictly increasing
    pub dates: Vec<Date>,

    /// Set when the iteration cap stopped the projection early
    pub truncated: bool,
}

impl Projection {
    /// Number of projected occurrences.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the projection produced no dates at all.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Fully scheduled occurrences of a plan up to a bound.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Schedule {
    /// Occurrences in send order
    pub occurrences: Vec<Occurrence>,

    /// Set when the underlying projection was truncated
    pub truncated: bool,
}

impl Schedule {
    /// Check if the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Get the number of scheduled occurrences.
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.occurrences.iter()
    }
}

/// On-demand preview of what a plan will do over a horizon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanPreview {
    /// Plan name
    pub name: String,

    /// Plan frequency
    pub frequency: Frequency,

    /// First send date
    pub first_send: Date,

    /// Close date of the first occurrence
    pub first_close: Date,

    /// Length of the preview horizon in days
    pub horizon_days: u32,

    /// Surveys sent inside `[start_date, start_date + horizon_days)`
    pub estimated_surveys: usize,

    /// Reminders sent per survey
    pub reminders_per_survey: usize,

    /// Days each survey stays open
    pub auto_close_after_days: u32,
}
