use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::TZeroCommands;

/// Main command-line interface for the tminus mission clock
///
/// Tminus tracks a mission elapsed-time countdown: a persisted T-zero
/// reference instant is compared against a live mission-time feed (the wall
/// clock, sampled by this tool) and rendered as a fixed-width `T+`/`T-`
/// countdown string.
#[derive(Parser)]
#[command(version, about, name = "tminus")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tminus/tminus.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the tminus CLI
///
/// The CLI is organized into three command categories:
/// - `tzero`: Manage the persisted T-zero reference instant
/// - `status`: Sample the clock once and print its state
/// - `watch`: Continuously render the countdown
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the T-zero reference instant
    #[command(name = "tzero", alias = "t")]
    TZero {
        #[command(subcommand)]
        command: TZeroCommands,
    },
    /// Show the mission clock state once
    Status {
        /// Also render mission time as wall-clock time in this IANA timezone
        #[arg(long)]
        timezone: Option<String>,
    },
    /// Continuously render the countdown until interrupted
    Watch {
        /// Milliseconds between mission-time samples
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,

        /// Also render mission time as wall-clock time in this IANA timezone
        #[arg(long)]
        timezone: Option<String>,
    },
}
