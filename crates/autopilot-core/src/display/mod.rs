//! Display formatting for plans and computed schedules.
//!
//! Domain models implement [`std::fmt::Display`] directly and produce
//! markdown, which the CLI renders to the terminal. Hosts embedding the
//! engine elsewhere can use the same output or serialize the models with
//! serde instead.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │   Formatted     │
//! │ (Plan, Schedule)│───▶│  CalendarDate   │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Schedule display with empty and truncated handling
//! - [`datetime`]: Date formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use autopilot_core::models::{ValidationError, ValidationResult};
//!
//! let report = ValidationResult::from_errors(vec![ValidationError::new(
//!     "name",
//!     "must not be empty",
//! )]);
//! let output = format!("{}", report);
//! assert!(output.contains("## Validation failed (1 error)"));
//! assert!(output.contains("- name: must not be empty"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;

pub use datetime::CalendarDate;
