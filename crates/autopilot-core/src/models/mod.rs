//! Data models for survey plans and the values computed from them.
//!
//! This module contains the domain types the engine reads ([`Plan`],
//! [`ReminderSettings`]) and the values it produces ([`Occurrence`],
//! [`Projection`], [`Schedule`], [`PlanPreview`], [`ValidationResult`]).
//! Display implementations for these models are located in
//! [`crate::display::models`] to keep presentation apart from the data.
//!
//! # Typed plans and drafts
//!
//! A [`Plan`] only holds values the engine understands: a closed
//! [`Frequency`], a set of [`Channel`]s and unsigned day counts. Raw editor
//! input arrives as a [`crate::params::PlanDraft`] and becomes a plan once
//! it passes validation.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//!
//! use autopilot_core::models::{Channel, Frequency, Plan, ReminderSettings};
//! use jiff::civil::date;
//!
//! let plan = Plan {
//!     id: Some(7),
//!     name: "Weekly pulse".to_string(),
//!     description: None,
//!     frequency: Frequency::Weekly,
//!     start_date: date(2024, 1, 1),
//!     end_date: None,
//!     is_active: true,
//!     question_rotation: false,
//!     reminder_settings: ReminderSettings::default(),
//!     distribution_channels: BTreeSet::from([Channel::Email]),
//!     target_audience: BTreeSet::from(["all".to_string()]),
//! };
//! println!("{}", plan); // Formats with markdown headers and schedule
//! ```

pub mod channel;
pub mod frequency;
pub mod occurrence;
pub mod plan;
pub mod validation;


pub use channel::Channel;
pub use frequency::Frequency;
pub use occurrence::{Occurrence, PlanPreview, Projection, Schedule};
pub use plan::{Plan, ReminderSettings, AUTO_CLOSE_DAYS_MAX, AUTO_CLOSE_DAYS_MIN};
pub use validation::{ValidationError, ValidationResult};
