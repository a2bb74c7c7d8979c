//! Recurrence frequency of a survey plan.

use std::str::FromStr;

use jiff::{Span, ToSpan};
use serde::{Deserialize, Serialize};

use crate::error::AutopilotError;

/// Type-safe enumeration of plan frequencies.
///
/// The set is closed: any other value is rejected when parsed, so there is
/// no fallback increment for unknown frequencies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every calendar day
    Daily,

    /// Every 7 days
    Weekly,

    /// Every 14 days
    Biweekly,

    /// Every calendar month, same day-of-month
    Monthly,

    /// Every 3 calendar months, same day-of-month
    Quarterly,
}

impl Frequency {
    /// Every recognized frequency, shortest interval first.
    pub const ALL: [Frequency; 5] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::Monthly,
        Frequency::Quarterly,
    ];

    /// Wire representation used in plan definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
        }
    }

    /// Human readable label for previews and reports.
    ///
    /// ```rust
    /// use autopilot_core::models::Frequency;
    ///
    /// assert_eq!(Frequency::Biweekly.label(), "Every 2 weeks");
    /// assert_eq!(Frequency::Quarterly.label(), "Quarterly");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Every 2 weeks",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
        }
    }

    /// Calendar increment between two consecutive occurrences.
    ///
    /// Month-based increments are expressed in months, not days, so that
    /// jiff clamps to the last day of shorter months.
    pub fn increment(&self) -> Span {
        match self {
            Frequency::Daily => 1.day(),
            Frequency::Weekly => 7.days(),
            Frequency::Biweekly => 14.days(),
            Frequency::Monthly => 1.month(),
            Frequency::Quarterly => 3.months(),
        }
    }

    /// Comma separated list of accepted values, for error messages.
    pub fn expected_values() -> String {
        Self::ALL
            .iter()
            .map(Frequency::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Frequency {
    type Err = AutopilotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "biweekly" => Ok(Frequency::Biweekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            _ => Err(AutopilotError::configuration(format!(
                "Unrecognized frequency '{s}', expected one of: {}",
                Self::expected_values()
            ))),
        }
    }
}
