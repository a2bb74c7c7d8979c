//! Collection display for computed schedules.
//!
//! Schedules format each occurrence in send order, handle the empty case
//! gracefully and flag truncated projections.

use std::fmt;

use crate::models::Schedule;

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.occurrences.is_empty() {
            writeln!(f, "No occurrences scheduled.")?;
        } else {
            for occurrence in &self.occurrences {
                write!(f, "{}", occurrence)?;
            }
        }

        if self.truncated {
            writeln!(
                f,
                "> Projection truncated after {} occurrences.",
                self.occurrences.len()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::models::{Occurrence, Schedule};

    fn occurrence(day: i8) -> Occurrence {
        Occurrence {
            plan_id: Some(1),
            scheduled_date: date(2024, 1, day),
            reminder_dates: vec![date(2024, 1, day + 3)],
            auto_close_date: date(2024, 1, day + 10),
        }
    }

    #[test]
    fn test_empty_schedule_display() {
        let output = Schedule::default().to_string();
        assert!(output.contains("No occurrences scheduled."));
        assert!(!output.contains("truncated"));
    }

    #[test]
    fn test_schedule_display_lists_occurrences() {
        let schedule = Schedule {
            occurrences: vec![occurrence(1), occurrence(8)],
            truncated: false,
        };
        let output = schedule.to_string();

        assert!(output.contains("### 2024-01-01 (Mon)"));
        assert!(output.contains("### 2024-01-08 (Mon)"));
        assert!(output.contains("- Reminders: 2024-01-04 (Thu)"));
        assert!(output.contains("- Closes: 2024-01-18 (Thu)"));
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_truncated_schedule_display() {
        let schedule = Schedule {
            occurrences: vec![occurrence(1)],
            truncated: true,
        };
        assert!(schedule
            .to_string()
            .contains("> Projection truncated after 1 occurrences."));
    }
}
