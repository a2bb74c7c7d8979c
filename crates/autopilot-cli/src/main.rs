//! Auto-Pilot CLI Application
//!
//! Command-line interface for validating and previewing recurring survey
//! plans.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use autopilot_core::AutopilotBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        max_occurrences,
        horizon_days,
        no_color,
        command,
    } = Args::parse();

    let autopilot = AutopilotBuilder::new()
        .with_max_occurrences(max_occurrences)
        .with_preview_horizon_days(horizon_days)
        .build()
        .context("Failed to initialize autopilot")?;

    let cli = Cli::new(autopilot, TerminalRenderer::new(!no_color));

    info!("Autopilot started");

    match command {
        Validate(args) => cli.validate(&args),
        Next(args) => cli.next(&args),
        Project(args) => cli.project(&args),
        Preview(args) => cli.preview(&args),
        Reminders(args) => cli.reminders(args),
        Frequencies => cli.frequencies(),
    }
}
