//! Recurrence and reminder engine for recurring survey plans.
//!
//! The engine is made of four pure components. Each is a plain function
//! module without shared state and can be called directly:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Validator    │    │   Projection    │    │    Reminders    │
//! │  (validate)     │───▶│ (project_       │───▶│ (reminder_dates,│
//! │                 │    │  occurrences)   │    │  auto_close_    │
//! └─────────────────┘    └────────┬────────┘    │  date)          │
//!                                 │             └─────────────────┘
//!                        ┌────────▼────────┐
//!                        │   Recurrence    │
//!                        │ (next_occurrence│
//!                        │                 │
//!                        └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Autopilot`] instances with configuration
//! - [`recurrence`]: Next occurrence of a plan
//! - [`reminders`]: Reminder firing dates and auto-close date of one occurrence
//! - [`validator`]: Structural plan rules, reporting every violation
//! - [`projection`]: Bounded enumeration of a plan's occurrences
//! - [`schedule`]: [`Autopilot`] methods composing the components above
//!
//! The [`Autopilot`] facade is a convenience for hosts: it carries the
//! projection cap and preview horizon and composes the components into
//! [`crate::models::Occurrence`] values.
//!
//! # Usage Examples
//!
//! ```rust
//! use autopilot_core::{params::PlanDraft, AutopilotBuilder};
//! use jiff::civil::date;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let autopilot = AutopilotBuilder::new().build()?;
//!
//! let plan = PlanDraft::from_json(
//!     r#"{
//!         "name": "Weekly pulse",
//!         "frequency": "weekly",
//!         "start_date": "2024-01-01",
//!         "reminder_settings": {
//!             "enabled": true,
//!             "reminder_days": [3, 7],
//!             "auto_close_after_days": 10
//!         },
//!         "distribution_channels": ["email"],
//!         "target_audience": ["all"]
//!     }"#,
//! )?
//! .into_plan()?;
//!
//! let schedule = autopilot.schedule(&plan, date(2024, 2, 1))?;
//! for occurrence in &schedule.occurrences {
//!     println!("{} closes {}", occurrence.scheduled_date, occurrence.auto_close_date);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod projection;
pub mod recurrence;
pub mod reminders;
pub mod schedule;
pub mod validator;


pub use builder::AutopilotBuilder;

/// Main engine interface carrying projection configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autopilot {
    pub(crate) max_occurrences: usize,
    pub(crate) preview_horizon_days: u32,
}

impl Autopilot {
    /// Creates an engine with the given projection cap and preview horizon.
    pub(crate) fn new(max_occurrences: usize, preview_horizon_days: u32) -> Self {
        Self {
            max_occurrences,
            preview_horizon_days,
        }
    }

    /// Iteration cap applied to projections.
    pub fn max_occurrences(&self) -> usize {
        self.max_occurrences
    }

    /// Horizon of [`Autopilot::preview`], in days.
    pub fn preview_horizon_days(&self) -> u32 {
        self.preview_horizon_days
    }
}
