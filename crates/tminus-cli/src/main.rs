//! Tminus CLI Application
//!
//! Command-line interface for the tminus mission elapsed-time clock.

mod args;
mod cli;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use tminus_core::MissionClockBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, json, command } = Args::parse();

    let clock = MissionClockBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize mission clock")?;

    let cli = Cli::new(clock, json);

    info!("tminus started");

    match command {
        Some(TZero { command }) => cli.handle_tzero_command(command),
        Some(Status { timezone }) => cli.show_status(timezone.as_deref()),
        Some(Watch { interval_ms, timezone }) => cli.watch(interval_ms, timezone.as_deref()).await,
        None => cli.show_status(None),
    }
}
