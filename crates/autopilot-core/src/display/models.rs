//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Dates shown with their weekday
//! - Reminder offsets shown after normalization, as the engine applies them

use std::fmt;

use super::datetime::{join_dates, CalendarDate};
use crate::models::{
    Channel, Frequency, Occurrence, Plan, PlanPreview, ReminderSettings, ValidationError,
    ValidationResult,
};

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => writeln!(f, "# {id}. {}", self.name)?,
            None => writeln!(f, "# {}", self.name)?,
        }
        writeln!(f)?;

        writeln!(f, "- Frequency: {}", self.frequency.label())?;
        writeln!(f, "- Starts: {}", CalendarDate(&self.start_date))?;
        if let Some(end) = &self.end_date {
            writeln!(f, "- Ends before: {}", CalendarDate(end))?;
        }
        writeln!(
            f,
            "- Status: {}",
            if self.is_active { "active" } else { "inactive" }
        )?;
        let channels: Vec<&str> = self
            .distribution_channels
            .iter()
            .map(Channel::as_str)
            .collect();
        writeln!(f, "- Channels: {}", channels.join(", "))?;
        let audience: Vec<&str> = self.target_audience.iter().map(String::as_str).collect();
        writeln!(f, "- Audience: {}", audience.join(", "))?;
        writeln!(f, "- Reminders: {}", self.reminder_settings)?;
        if self.question_rotation {
            writeln!(f, "- Question rotation: on")?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for ReminderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.normalized_days();
        if days.is_empty() {
            write!(f, "none")?;
        } else {
            let days: Vec<String> = days.iter().map(ToString::to_string).collect();
            write!(f, "days {}", days.join(", "))?;
        }
        write!(f, " (closes after {} days)", self.auto_close_after_days)
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", CalendarDate(&self.scheduled_date))?;
        writeln!(f)?;

        if self.reminder_dates.is_empty() {
            writeln!(f, "- Reminders: none")?;
        } else {
            writeln!(f, "- Reminders: {}", join_dates(&self.reminder_dates))?;
        }
        writeln!(f, "- Closes: {}", CalendarDate(&self.auto_close_date))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return writeln!(f, "Plan is valid.");
        }

        let noun = if self.errors.len() == 1 { "error" } else { "errors" };
        writeln!(f, "## Validation failed ({} {noun})", self.errors.len())?;
        writeln!(f)?;
        for error in &self.errors {
            writeln!(f, "- {error}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Preview: {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- **Frequency**: {}", self.frequency.label())?;
        writeln!(f, "- **First send**: {}", CalendarDate(&self.first_send))?;
        writeln!(f, "- **First close**: {}", CalendarDate(&self.first_close))?;
        writeln!(
            f,
            "- **Estimated surveys** (next {} days): {}",
            self.horizon_days, self.estimated_surveys
        )?;
        writeln!(f, "- **Reminders per survey**: {}", self.reminders_per_survey)?;
        writeln!(
            f,
            "- **Auto-close after**: {} days",
            self.auto_close_after_days
        )?;
        Ok(())
    }
}
