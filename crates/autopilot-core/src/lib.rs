//! Core library for the Auto-Pilot survey scheduling engine.
//!
//! This crate decides, for a recurring survey plan, when each survey is
//! sent, when its reminders fire, when it closes and how many surveys the
//! plan produces over a horizon. Every operation is a pure function over
//! immutable inputs; persistence, delivery and metrics belong to the host.
//!
//! # Components
//!
//! - **Recurrence** ([`engine::recurrence`]): next occurrence of a plan
//! - **Reminders** ([`engine::reminders`]): reminder and auto-close dates
//! - **Validator** ([`engine::validator`]): every rule violation in one pass
//! - **Projection** ([`engine::projection`]): bounded occurrence forecast
//!
//! The [`Autopilot`] facade composes them for hosts that want fully formed
//! [`Occurrence`] values or a plan preview.
//!
//! # Quick Start
//!
//! ```rust
//! use autopilot_core::{
//!     engine::{projection::project_occurrences, reminders::reminder_dates},
//!     params::PlanDraft,
//! };
//! use jiff::civil::date;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let plan = PlanDraft::from_json(
//!     r#"{
//!         "name": "Monthly engagement",
//!         "frequency": "monthly",
//!         "start_date": "2024-01-31",
//!         "reminder_settings": {
//!             "enabled": true,
//!             "reminder_days": [7, 3, 3],
//!             "auto_close_after_days": 10
//!         },
//!         "distribution_channels": ["email", "qr"],
//!         "target_audience": ["engineering"]
//!     }"#,
//! )?
//! .into_plan()?;
//!
//! let projection = project_occurrences(&plan, date(2024, 4, 1))?;
//! assert_eq!(projection.dates[1], date(2024, 2, 29));
//!
//! let reminders = reminder_dates(projection.dates[0], &plan.reminder_settings)?;
//! assert_eq!(reminders, vec![date(2024, 2, 3), date(2024, 2, 7)]);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use display::CalendarDate;
pub use engine::{
    projection::{project_occurrences, MAX_PROJECTED_OCCURRENCES},
    recurrence::next_occurrence,
    reminders::{auto_close_date, reminder_dates},
    validator::{validate, validate_plan},
    Autopilot, AutopilotBuilder,
};
pub use error::{AutopilotError, Result};
pub use models::{
    Channel, Frequency, Occurrence, Plan, PlanPreview, Projection, ReminderSettings, Schedule,
    ValidationError, ValidationResult,
};
pub use params::{PlanDraft, ReminderDraft, ReminderQuery};
