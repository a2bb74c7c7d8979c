//! Builder for creating and configuring Autopilot instances.

use super::{projection::MAX_PROJECTED_OCCURRENCES, Autopilot};
use crate::error::{AutopilotError, Result};

/// Default preview horizon, in days.
pub const DEFAULT_PREVIEW_HORIZON_DAYS: u32 = 90;

/// Builder for creating and configuring Autopilot instances.
#[derive(Debug, Clone)]
pub struct AutopilotBuilder {
    max_occurrences: Option<usize>,
    preview_horizon_days: Option<u32>,
}

impl AutopilotBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            max_occurrences: None,
            preview_horizon_days: None,
        }
    }

    /// Sets the iteration cap applied to projections.
    ///
    /// If not specified, [`MAX_PROJECTED_OCCURRENCES`] is used.
    pub fn with_max_occurrences(mut self, max_occurrences: Option<usize>) -> Self {
        if let Some(max_occurrences) = max_occurrences {
            self.max_occurrences = Some(max_occurrences);
        }
        self
    }

    /// Sets the horizon used by previews.
    ///
    /// If not specified, [`DEFAULT_PREVIEW_HORIZON_DAYS`] is used.
    pub fn with_preview_horizon_days(mut self, days: Option<u32>) -> Self {
        if let Some(days) = days {
            self.preview_horizon_days = Some(days);
        }
        self
    }

    /// Builds the configured engine.
    ///
    /// # Errors
    ///
    /// Returns `AutopilotError::Configuration` if the cap or the horizon is
    /// zero.
    pub fn build(self) -> Result<Autopilot> {
        let max_occurrences = self.max_occurrences.unwrap_or(MAX_PROJECTED_OCCURRENCES);
        if max_occurrences == 0 {
            return Err(AutopilotError::configuration(
                "max_occurrences must be at least 1",
            ));
        }

        let preview_horizon_days = self
            .preview_horizon_days
            .unwrap_or(DEFAULT_PREVIEW_HORIZON_DAYS);
        if preview_horizon_days == 0 {
            return Err(AutopilotError::configuration(
                "preview_horizon_days must be at least 1",
            ));
        }

        Ok(Autopilot::new(max_occurrences, preview_horizon_days))
    }
}

impl Default for AutopilotBuilder {
    fn default() -> Self {
        Self::new()
    }
}
