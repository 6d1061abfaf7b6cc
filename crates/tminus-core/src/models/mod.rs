//! Data models for the mission clock.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.

pub mod snapshot;

pub use snapshot::TimerSnapshot;
