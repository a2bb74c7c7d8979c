//! Reminder scheduler: reminder firing dates and the auto-close date of a
//! single occurrence.

use jiff::{civil::Date, ToSpan};

use crate::{
    error::{DateResultExt, Result},
    models::ReminderSettings,
};

/// Computes the reminder firing dates for an occurrence sent on
/// `occurrence_date`, earliest first.
///
/// Offsets are normalized by [`ReminderSettings::normalized_days`], so
/// duplicated offsets fire once and offsets on or after the auto-close day
/// never fire. Disabled settings produce no reminders.
pub fn reminder_dates(occurrence_date: Date, settings: &ReminderSettings) -> Result<Vec<Date>> {
    settings
        .normalized_days()
        .into_iter()
        .map(|day| offset_date(occurrence_date, day))
        .collect()
}

/// Date after which an occurrence sent on `occurrence_date` stops accepting
/// responses.
pub fn auto_close_date(occurrence_date: Date, auto_close_after_days: u32) -> Result<Date> {
    offset_date(occurrence_date, auto_close_after_days)
}

fn offset_date(date: Date, days: u32) -> Result<Date> {
    date.checked_add(i64::from(days).days()).date_context(date)
}
