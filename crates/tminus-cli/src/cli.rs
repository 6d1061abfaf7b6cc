//! Command handlers bridging clap arguments to the core clock API.
//!
//! This module implements the parameter wrapper pattern: clap-specific
//! argument structures live here and convert into the core's
//! interface-agnostic parameter types before any business logic runs, so the
//! core stays free of CLI framework concerns.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Subcommand;
use jiff::Timestamp;
use log::debug;
use tminus_core::{EditorOutcome, MissionClock, MissionElapsed, SetTZero, TimerSnapshot, ZonedTime};

/// T-zero management subcommands
#[derive(Subcommand)]
pub enum TZeroCommands {
    /// Set the T-zero reference instant
    Set {
        /// Absolute time in canonical RFC 3339 form, e.g. 2024-06-19T15:00:00Z
        time: String,
    },
    /// Clear the T-zero reference instant
    Clear,
    /// Show the current T-zero reference instant
    Show,
}

/// Command dispatcher owning the mission clock instance.
pub struct Cli {
    clock: MissionClock,
    json: bool,
}

impl Cli {
    /// Creates a new CLI handler.
    pub fn new(clock: MissionClock, json: bool) -> Self {
        Self { clock, json }
    }

    /// Handles T-zero management commands.
    pub fn handle_tzero_command(&self, command: TZeroCommands) -> Result<()> {
        match command {
            TZeroCommands::Set { time } => {
                let params = SetTZero { time };
                let outcome = self
                    .clock
                    .set_tzero(&params)
                    .context("Failed to set T-zero")?;
                match outcome {
                    EditorOutcome::Saved => {
                        if let Some(t_zero) = self.clock.tzero() {
                            println!("T-zero set to {t_zero}");
                        }
                    }
                    // The editor itself rejects silently; the CLI still tells
                    // the user nothing happened.
                    EditorOutcome::StillOpen => {
                        println!(
                            "T-zero unchanged: '{}' is not a parseable absolute time",
                            params.time,
                        );
                    }
                }
            }
            TZeroCommands::Clear => {
                self.clock
                    .clear_tzero()
                    .context("Failed to clear T-zero")?;
                println!("T-zero cleared");
            }
            TZeroCommands::Show => match self.clock.tzero() {
                Some(t_zero) => println!("{t_zero}"),
                None => println!("(not set)"),
            },
        }
        Ok(())
    }

    /// Samples the wall clock once as the mission-time feed and prints the
    /// resulting snapshot.
    pub fn show_status(&self, timezone: Option<&str>) -> Result<()> {
        let snapshot = self.clock.observe(Timestamp::now());

        if self.json {
            let rendered = serde_json::to_string_pretty(&snapshot)
                .context("Failed to serialize snapshot")?;
            println!("{rendered}");
            return Ok(());
        }

        println!("{snapshot}");
        if let Some(zone) = timezone {
            let mission_time = snapshot.mission_time.map(|t| t.to_string());
            println!(
                "Local ({zone}): {}",
                ZonedTime::new(mission_time.as_deref(), zone),
            );
        }
        Ok(())
    }

    /// Renders the countdown on a single line until Ctrl-C.
    pub async fn watch(&self, interval_ms: u64, timezone: Option<&str>) -> Result<()> {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let snapshot = self.clock.observe(Timestamp::now());
                    print!("\r{}", render_watch_line(&snapshot, timezone));
                    std::io::stdout().flush().context("Failed to flush stdout")?;
                }
                result = &mut ctrl_c => {
                    result.context("Failed to listen for interrupt")?;
                    println!();
                    debug!("watch interrupted");
                    return Ok(());
                }
            }
        }
    }
}

fn render_watch_line(snapshot: &TimerSnapshot, timezone: Option<&str>) -> String {
    let elapsed = MissionElapsed(snapshot.elapsed_ms);
    match timezone {
        Some(zone) => {
            let mission_time = snapshot.mission_time.map(|t| t.to_string());
            format!(
                "{elapsed}  [{}]",
                ZonedTime::new(mission_time.as_deref(), zone),
            )
        }
        None => elapsed.to_string(),
    }
}
