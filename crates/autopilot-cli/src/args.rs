use clap::{Parser, Subcommand};

use crate::cli::{NextArgs, PreviewArgs, ProjectArgs, RemindersArgs, ValidateArgs};

/// Command-line interface for the Auto-Pilot survey scheduler
///
/// Auto-Pilot computes when a recurring survey plan sends its surveys, when
/// reminders fire and when each survey closes. Plans are read from JSON
/// files; nothing is stored or sent.
#[derive(Parser)]
#[command(version, about, name = "autopilot")]
pub struct Args {
    /// Maximum number of occurrences a projection may produce. Defaults to
    /// 10000
    #[arg(long, global = true)]
    pub max_occurrences: Option<usize>,

    /// Length of the preview horizon in days. Defaults to 90
    #[arg(long, global = true)]
    pub horizon_days: Option<u32>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Auto-Pilot CLI
///
/// - `validate`: check a plan file against every plan rule
/// - `next`, `project`, `preview`: compute dates for a valid plan file
/// - `reminders`: compute dates for an ad-hoc send without a plan
#[derive(Subcommand)]
pub enum Commands {
    /// Check a plan file and list every rule it violates
    #[command(alias = "v")]
    Validate(ValidateArgs),
    /// Show the next send of a plan with its reminders
    #[command(alias = "n")]
    Next(NextArgs),
    /// Schedule every occurrence of a plan up to a date
    #[command(alias = "p")]
    Project(ProjectArgs),
    /// Summarize what a plan does over the preview horizon
    Preview(PreviewArgs),
    /// Compute reminder and close dates for a single send
    #[command(alias = "r")]
    Reminders(RemindersArgs),
    /// List recognized plan frequencies
    #[command(alias = "f")]
    Frequencies,
}
