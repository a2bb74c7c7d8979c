//! Error types for the autopilot engine.

use std::path::PathBuf;

use jiff::civil::Date;
use thiserror::Error;

use crate::models::ValidationResult;

/// Comprehensive error type for all autopilot operations.
#[derive(Error, Debug)]
pub enum AutopilotError {
    /// Unrecognized configuration values, such as an unknown frequency
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// A plan draft failed validation while being converted into a plan
    #[error("Invalid plan: {report}")]
    InvalidPlan { report: ValidationResult },
    /// Calendar arithmetic left the supported date range
    #[error("Date arithmetic from {date} is out of range: {source}")]
    DateOutOfRange {
        date: Date,
        #[source]
        source: jiff::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl AutopilotError {
    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        AutopilotError::Configuration {
            message: message.into(),
        }
    }
}

/// Extension trait for mapping calendar arithmetic failures.
pub trait DateResultExt<T> {
    /// Map a jiff error into [`AutopilotError::DateOutOfRange`] anchored at
    /// `date`.
    fn date_context(self, date: Date) -> Result<T>;
}

impl<T> DateResultExt<T> for std::result::Result<T, jiff::Error> {
    fn date_context(self, date: Date) -> Result<T> {
        self.map_err(|source| AutopilotError::DateOutOfRange { date, source })
    }
}

/// Result type alias for autopilot operations
pub type Result<T> = std::result::Result<T, AutopilotError>;
