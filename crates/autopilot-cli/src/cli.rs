//! Command-line argument definitions and command handlers
//!
//! Each command has a clap argument struct converted into core parameters,
//! keeping clap out of `autopilot-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params / Plan → Engine → Markdown
//! ```
//!
//! Plan files are loaded into a [`PlanDraft`] and converted into a typed
//! plan before any date is computed, so every command except `validate`
//! refuses to work on an invalid plan.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use autopilot_core::{
    auto_close_date, models::Frequency, reminder_dates, Autopilot, Occurrence, Plan, PlanDraft,
    ReminderQuery,
};
use clap::Args;
use jiff::civil::Date;
use log::{debug, info};

use crate::renderer::TerminalRenderer;

/// Check a plan file against every plan rule
///
/// All violations are listed at once. The command fails when the plan is
/// invalid so it can gate scripts and CI jobs.
#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the JSON plan file
    #[arg(help = "Path to the JSON plan definition to validate")]
    pub plan: PathBuf,
}

/// Show the next send of a plan
///
/// Without --from the first send (the plan's start date) is shown. Pass the
/// date of the previous send to get the one after it.
#[derive(Args)]
pub struct NextArgs {
    #[arg(help = "Path to the JSON plan definition")]
    pub plan: PathBuf,
    #[arg(long, help = "Date of the previous send (YYYY-MM-DD)")]
    pub from: Option<Date>,
}

/// Schedule every occurrence of a plan up to a date
///
/// Lists each send with its reminder dates and close date. The first send
/// on or after --until is included.
#[derive(Args)]
pub struct ProjectArgs {
    #[arg(help = "Path to the JSON plan definition")]
    pub plan: PathBuf,
    #[arg(long, help = "End of the projection window (YYYY-MM-DD)")]
    pub until: Date,
}

/// Summarize what a plan does over the preview horizon
#[derive(Args)]
pub struct PreviewArgs {
    #[arg(help = "Path to the JSON plan definition")]
    pub plan: PathBuf,
}

/// Compute reminder and close dates for a single send
#[derive(Args)]
pub struct RemindersArgs {
    #[arg(help = "Date the survey is sent (YYYY-MM-DD)")]
    pub date: Date,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Reminder offsets in days as comma-separated list"
    )]
    pub days: Vec<u32>,
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(1..=30),
        help = "Days after the send at which the survey closes (1-30)"
    )]
    pub close_after: u32,
}

impl From<RemindersArgs> for ReminderQuery {
    fn from(val: RemindersArgs) -> Self {
        ReminderQuery {
            occurrence_date: val.date,
            reminder_days: val.days,
            auto_close_after_days: val.close_after,
        }
    }
}

/// Command handler rendering engine results to the terminal.
pub struct Cli {
    autopilot: Autopilot,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(autopilot: Autopilot, renderer: TerminalRenderer) -> Self {
        Self {
            autopilot,
            renderer,
        }
    }

    pub fn validate(&self, args: &ValidateArgs) -> Result<()> {
        let draft = load_draft(&args.plan)?;
        let report = self.autopilot.validate(&draft);
        self.renderer.render(&report.to_string())?;

        if !report.valid {
            bail!("Plan file '{}' is invalid", args.plan.display());
        }
        Ok(())
    }

    pub fn next(&self, args: &NextArgs) -> Result<()> {
        let plan = load_plan(&args.plan)?;
        let date = self
            .autopilot
            .next_occurrence(&plan, args.from)
            .context("Failed to compute next occurrence")?;
        let occurrence = self.autopilot.occurrence(&plan, date)?;

        let heading = match args.from {
            Some(from) => format!("## Next survey of {} after {from}", plan.name),
            None => format!("## First survey of {}", plan.name),
        };
        self.renderer.render(&format!("{heading}\n\n{occurrence}"))
    }

    pub fn project(&self, args: &ProjectArgs) -> Result<()> {
        let plan = load_plan(&args.plan)?;
        let schedule = self
            .autopilot
            .schedule(&plan, args.until)
            .context("Failed to project occurrences")?;
        info!(
            "Scheduled {} occurrences of '{}'",
            schedule.len(),
            plan.name
        );

        self.renderer.render(&format!(
            "# {} until {}\n\n{schedule}",
            plan.name, args.until
        ))
    }

    pub fn preview(&self, args: &PreviewArgs) -> Result<()> {
        let plan = load_plan(&args.plan)?;
        let preview = self
            .autopilot
            .preview(&plan)
            .context("Failed to build plan preview")?;
        self.renderer.render(&format!("{plan}\n{preview}"))
    }

    pub fn reminders(&self, args: RemindersArgs) -> Result<()> {
        let query = ReminderQuery::from(args);
        let occurrence = Occurrence {
            plan_id: None,
            scheduled_date: query.occurrence_date,
            reminder_dates: reminder_dates(query.occurrence_date, &query.settings())?,
            auto_close_date: auto_close_date(
                query.occurrence_date,
                query.auto_close_after_days,
            )?,
        };
        self.renderer.render(&format!("## Reminders\n\n{occurrence}"))
    }

    pub fn frequencies(&self) -> Result<()> {
        let mut output = String::from("## Frequencies\n\n");
        for frequency in Frequency::ALL {
            output.push_str(&format!("- {}: {}\n", frequency.as_str(), frequency.label()));
        }
        self.renderer.render(&output)
    }
}

fn load_draft(path: &Path) -> Result<PlanDraft> {
    debug!("Loading plan file {}", path.display());
    PlanDraft::from_path(path)
        .with_context(|| format!("Failed to read plan file '{}'", path.display()))
}

fn load_plan(path: &Path) -> Result<Plan> {
    load_draft(path)?
        .into_plan()
        .with_context(|| format!("Plan file '{}' is not valid", path.display()))
}
