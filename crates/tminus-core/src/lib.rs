//! Core library for the tminus mission clock.
//!
//! This crate provides the mission-elapsed-time pipeline of a mission control
//! console: a persisted, observable T-zero reference instant, a reactive
//! derivation of the signed elapsed duration against a live mission-time
//! feed, and fixed-width countdown / timezone-aware wall-clock formatting.
//!
//! # Architecture
//!
//! Values flow one way: the external mission-time feed and the T-zero store
//! feed the elapsed-time derivation, whose output is rendered by the display
//! wrappers. Every failure mode in the presentation path degrades to a
//! fixed-width placeholder instead of an error, so a live view never
//! crashes over a missing or malformed value.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::Timestamp;
//! use tminus_core::{params::SetTZero, MissionClockBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a clock instance
//! let clock = MissionClockBuilder::new()
//!     .with_database_path(Some("clock.db"))
//!     .build()?;
//!
//! // Set the reference instant and feed one mission-time sample
//! clock.set_tzero(&SetTZero {
//!     time: "2024-06-19T15:00:00Z".to_string(),
//! })?;
//! let snapshot = clock.observe("2024-06-19T15:22:45Z".parse::<Timestamp>()?);
//!
//! // Renders "Elapsed:      T+000d:00h:22m:45s" among other lines
//! println!("{snapshot}");
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod signal;

// Re-export commonly used types
pub use clock::{
    EditorOutcome, MissionClock, MissionClockBuilder, MissionTimer, TZeroForm, TZeroStore,
};
pub use db::Database;
pub use display::{format_elapsed, MissionElapsed, ZonedTime, UNKNOWN_ELAPSED, UNKNOWN_TIME};
pub use error::{ClockError, Result};
pub use models::TimerSnapshot;
pub use params::SetTZero;
pub use signal::{Signal, Subscription};
