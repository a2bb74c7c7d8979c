//! Autopilot operations composing recurrence, projection and reminders.

use jiff::{civil::Date, ToSpan};
use log::{debug, warn};

use super::{projection, recurrence, reminders, validator, Autopilot};
use crate::{
    error::{DateResultExt, Result},
    models::{Occurrence, Plan, PlanPreview, Projection, Schedule, ValidationResult},
    params::PlanDraft,
};

impl Autopilot {
    /// Validates a plan draft, reporting every violation.
    pub fn validate(&self, draft: &PlanDraft) -> ValidationResult {
        validator::validate(draft)
    }

    /// Computes the occurrence following `from_date`, or the first one.
    pub fn next_occurrence(&self, plan: &Plan, from_date: Option<Date>) -> Result<Date> {
        recurrence::next_occurrence(plan, from_date)
    }

    /// Projects occurrence dates up to `window_end` with the configured cap.
    ///
    /// A truncated projection is logged as a warning and returned as is.
    pub fn project(&self, plan: &Plan, window_end: Date) -> Result<Projection> {
        let projection =
            projection::project_occurrences_with_limit(plan, window_end, self.max_occurrences)?;

        if projection.truncated {
            warn!(
                "Projection of plan '{}' truncated after {} occurrences",
                plan.name,
                projection.len()
            );
        }
        debug!(
            "Projected {} occurrences of plan '{}' up to {window_end}",
            projection.len(),
            plan.name
        );
        Ok(projection)
    }

    /// Builds the occurrence of `plan` sent on `scheduled_date`, with its
    /// reminder dates and auto-close date.
    pub fn occurrence(&self, plan: &Plan, scheduled_date: Date) -> Result<Occurrence> {
        let settings = &plan.reminder_settings;
        Ok(Occurrence {
            plan_id: plan.id,
            scheduled_date,
            reminder_dates: reminders::reminder_dates(scheduled_date, settings)?,
            auto_close_date: reminders::auto_close_date(
                scheduled_date,
                settings.auto_close_after_days,
            )?,
        })
    }

    /// Schedules every projected occurrence of `plan` up to `window_end`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use autopilot_core::{models::Plan, AutopilotBuilder};
    /// # use jiff::civil::date;
    /// # fn example(plan: &Plan) -> autopilot_core::Result<()> {
    /// let autopilot = AutopilotBuilder::new().build()?;
    /// let schedule = autopilot.schedule(plan, date(2024, 6, 30))?;
    /// if schedule.truncated {
    ///     eprintln!("schedule is incomplete");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn schedule(&self, plan: &Plan, window_end: Date) -> Result<Schedule> {
        let projection = self.project(plan, window_end)?;
        let occurrences = projection
            .dates
            .iter()
            .map(|&date| self.occurrence(plan, date))
            .collect::<Result<Vec<_>>>()?;

        Ok(Schedule {
            occurrences,
            truncated: projection.truncated,
        })
    }

    /// Summarizes what `plan` does over the configured preview horizon.
    ///
    /// The estimate counts surveys sent in
    /// `[start_date, start_date + horizon)`, so the boundary occurrence of
    /// the projection is not counted.
    pub fn preview(&self, plan: &Plan) -> Result<PlanPreview> {
        let horizon_end = plan
            .start_date
            .checked_add(i64::from(self.preview_horizon_days).days())
            .date_context(plan.start_date)?;
        let projection = self.project(plan, horizon_end)?;
        let estimated_surveys = projection
            .dates
            .iter()
            .filter(|&&date| date < horizon_end)
            .count();

        let settings = &plan.reminder_settings;
        Ok(PlanPreview {
            name: plan.name.clone(),
            frequency: plan.frequency,
            first_send: recurrence::next_occurrence(plan, None)?,
            first_close: reminders::auto_close_date(
                plan.start_date,
                settings.auto_close_after_days,
            )?,
            horizon_days: self.preview_horizon_days,
            estimated_surveys,
            reminders_per_survey: settings.max_reminders(),
            auto_close_after_days: settings.auto_close_after_days,
        })
    }
}
