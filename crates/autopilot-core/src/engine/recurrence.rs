//! Recurrence calculator: when does a plan send its next survey.

use jiff::civil::Date;

use crate::{
    error::{DateResultExt, Result},
    models::Plan,
};

/// Computes the occurrence following `from_date`.
///
/// Without `from_date` the first occurrence, `plan.start_date`, is
/// returned. With a previous occurrence the frequency's increment is added
/// to it; month-based increments clamp to the last day of shorter months.
/// The result is always strictly later than `from_date`.
///
/// # Errors
///
/// Returns `AutopilotError::DateOutOfRange` when the result would fall
/// outside the supported calendar.
///
/// # Examples
///
/// ```rust
/// # use std::collections::BTreeSet;
/// # use autopilot_core::models::{Channel, Frequency, Plan, ReminderSettings};
/// use autopilot_core::engine::recurrence::next_occurrence;
/// use jiff::civil::date;
///
/// # let plan = Plan {
/// #     id: None,
/// #     name: "Monthly check-in".to_string(),
/// #     description: None,
/// #     frequency: Frequency::Monthly,
/// #     start_date: date(2023, 1, 31),
/// #     end_date: None,
/// #     is_active: true,
/// #     question_rotation: false,
/// #     reminder_settings: ReminderSettings::default(),
/// #     distribution_channels: BTreeSet::from([Channel::Email]),
/// #     target_audience: BTreeSet::from(["all".to_string()]),
/// # };
/// assert_eq!(next_occurrence(&plan, None)?, date(2023, 1, 31));
/// assert_eq!(next_occurrence(&plan, Some(date(2023, 1, 31)))?, date(2023, 2, 28));
/// # Ok::<(), autopilot_core::AutopilotError>(())
/// ```
pub fn next_occurrence(plan: &Plan, from_date: Option<Date>) -> Result<Date> {
    let Some(from) = from_date else {
        return Ok(plan.start_date);
    };

    from.checked_add(plan.frequency.increment())
        .date_context(from)
}
