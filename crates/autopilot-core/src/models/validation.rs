//! Outcome of plan validation.

use serde::{Deserialize, Serialize};

/// A single rule violation on a plan field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending field
    pub field: String,

    /// Why the value was rejected
    pub reason: String,
}

impl ValidationError {
    /// Create a violation for `field`.
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Every violation found on a plan in a single pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// True when no rule was violated
    pub valid: bool,

    /// Violations in rule order
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Build a result from collected violations.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Violations rendered as `field: reason` strings.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Whether a violation was recorded for `field`.
    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}
