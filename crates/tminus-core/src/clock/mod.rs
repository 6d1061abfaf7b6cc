//! High-level mission clock API.
//!
//! This module provides the main [`MissionClock`] interface: a single owned
//! instance that couples the persisted T-zero store with the elapsed-time
//! derivation, created once at startup and passed by reference to every
//! consumer.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────────┐
//! │ Mission-time │    │  TZeroStore  │    │   MissionTimer   │
//! │    feed      │───▶│  (persisted) │───▶│ (elapsed signal) │
//! └──────────────┘    └──────────────┘    └──────────────────┘
//!    push(time)        set / clear          elapsed() / watch
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`MissionClock`] instances with configuration
//! - [`store`]: Durable, observable T-zero store
//! - [`timer`]: Reactive elapsed-time derivation
//! - [`editor`]: Form workflow for setting/clearing the T-zero

use jiff::Timestamp;

pub mod builder;
pub mod editor;
pub mod store;
pub mod timer;

#[cfg(test)]
mod tests;

pub use builder::MissionClockBuilder;
pub use editor::{EditorOutcome, TZeroForm};
pub use store::TZeroStore;
pub use timer::MissionTimer;

use crate::{db::Database, error::Result, models::TimerSnapshot, params::SetTZero};

/// Main mission clock interface owning the store and the timer.
pub struct MissionClock {
    store: TZeroStore,
    timer: MissionTimer,
}

impl MissionClock {
    /// Creates a clock over an initialized database.
    pub(crate) fn new(db: Database) -> Result<Self> {
        let store = TZeroStore::new(db)?;
        let timer = MissionTimer::new(&store);
        Ok(Self { store, timer })
    }

    /// The T-zero store.
    pub fn store(&self) -> &TZeroStore {
        &self.store
    }

    /// The elapsed-time derivation.
    pub fn timer(&self) -> &MissionTimer {
        &self.timer
    }

    /// Handles a T-zero update through the editor form.
    ///
    /// Returns the editor outcome: an empty or unparseable time value leaves
    /// the store untouched and reports [`EditorOutcome::StillOpen`].
    pub fn set_tzero(&self, params: &SetTZero) -> Result<EditorOutcome> {
        let mut form = TZeroForm::open(&self.store);
        form.set_field(params.time.clone());
        form.confirm_set(&self.store)
    }

    /// Clears the T-zero through the editor form.
    pub fn clear_tzero(&self) -> Result<EditorOutcome> {
        TZeroForm::open(&self.store).confirm_clear(&self.store)
    }

    /// Returns the current T-zero, if one is set.
    pub fn tzero(&self) -> Option<Timestamp> {
        self.store.read()
    }

    /// Feeds one mission-time sample and returns the resulting snapshot.
    pub fn observe(&self, time: Timestamp) -> TimerSnapshot {
        self.timer.push(time);
        self.snapshot()
    }

    /// Returns a point-in-time view of the clock state.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mission_time: self.timer.mission_time(),
            t_zero: self.store.read(),
            elapsed_ms: self.timer.elapsed(),
        }
    }
}
