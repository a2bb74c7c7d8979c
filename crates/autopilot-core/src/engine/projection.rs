//! Projection engine: enumerates the occurrences a plan produces up to a
//! bound.

use jiff::civil::Date;

use log::debug;

use super::recurrence::next_occurrence;
use crate::{
    error::{AutopilotError, Result},
    models::{Plan, Projection},
};

/// Default iteration cap of a projection.
pub const MAX_PROJECTED_OCCURRENCES: usize = 10_000;

/// Enumerates the occurrence dates of `plan` from its start date up to
/// `window_end`.
///
/// Each date follows the previous one through [`next_occurrence`], so a
/// projection agrees with a scheduler chaining sends one at a time. Every
/// occurrence before `window_end` is produced, followed by the first
/// occurrence on or after it. Occurrences on or after `plan.end_date` are
/// never produced. The projection stops after
/// [`MAX_PROJECTED_OCCURRENCES`] dates, or when the next date would leave
/// the supported calendar, and is then marked truncated.
///
/// # Examples
///
/// ```rust
/// # use std::collections::BTreeSet;
/// # use autopilot_core::models::{Channel, Frequency, Plan, ReminderSettings};
/// use autopilot_core::engine::projection::project_occurrences;
/// use jiff::civil::date;
///
/// # let plan = Plan {
/// #     id: None,
/// #     name: "Weekly pulse".to_string(),
/// #     description: None,
/// #     frequency: Frequency::Weekly,
/// #     start_date: date(2024, 1, 1),
/// #     end_date: None,
/// #     is_active: true,
/// #     question_rotation: false,
/// #     reminder_settings: ReminderSettings::default(),
/// #     distribution_channels: BTreeSet::from([Channel::Email]),
/// #     target_audience: BTreeSet::from(["all".to_string()]),
/// # };
/// let projection = project_occurrences(&plan, date(2024, 4, 1))?;
/// assert_eq!(projection.len(), 14);
/// assert_eq!(projection.dates.last(), Some(&date(2024, 4, 1)));
/// assert!(!projection.truncated);
/// # Ok::<(), autopilot_core::AutopilotError>(())
/// ```
pub fn project_occurrences(plan: &Plan, window_end: Date) -> Result<Projection> {
    project_occurrences_with_limit(plan, window_end, MAX_PROJECTED_OCCURRENCES)
}

/// Same as [`project_occurrences`] with a caller supplied iteration cap.
pub fn project_occurrences_with_limit(
    plan: &Plan,
    window_end: Date,
    limit: usize,
) -> Result<Projection> {
    let mut dates: Vec<Date> = Vec::new();
    let mut date = next_occurrence(plan, None)?;

    loop {
        if dates.len() >= limit {
            return Ok(Projection {
                dates,
                truncated: true,
            });
        }
        if plan.end_date.is_some_and(|end| date >= end) {
            break;
        }

        dates.push(date);
        if date >= window_end {
            break;
        }

        let next = match next_occurrence(plan, Some(date)) {
            Ok(next) => next,
            Err(AutopilotError::DateOutOfRange { date: last, .. }) => {
                debug!("Projection reached the end of the calendar after {last}");
                return Ok(Projection {
                    dates,
                    truncated: true,
                });
            }
            Err(e) => return Err(e),
        };
        if next <= date {
            return Ok(Projection {
                dates,
                truncated: true,
            });
        }
        date = next;
    }

    Ok(Projection {
        dates,
        truncated: false,
    })
}
