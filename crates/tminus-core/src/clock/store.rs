//! T-zero store: single source of truth for the reference instant.

use jiff::Timestamp;

use crate::{
    db::Database,
    error::Result,
    signal::{Signal, Subscription},
};

/// Fixed settings key under which the T-zero instant is persisted.
const TZERO_KEY: &str = "tzero";

/// Holds the optional T-zero reference instant, with durable persistence and
/// synchronous change notification.
///
/// All mutation funnels through [`TZeroStore::set`] and [`TZeroStore::clear`]
/// on the owning instance, so observers never race a concurrent write.
pub struct TZeroStore {
    db: Database,
    value: Signal<Option<Timestamp>>,
}

impl TZeroStore {
    /// Creates a store over the given database, loading any persisted T-zero.
    ///
    /// A stored string that no longer parses as a timestamp is treated as
    /// never set; only the database read itself can fail.
    pub(crate) fn new(db: Database) -> Result<Self> {
        let loaded = db
            .get_setting(TZERO_KEY)?
            .and_then(|raw| raw.parse::<Timestamp>().ok());

        let value = Signal::new();
        value.publish(loaded);
        Ok(Self { db, value })
    }

    /// Returns the current T-zero, or `None` if unset.
    pub fn read(&self) -> Option<Timestamp> {
        self.value.latest().unwrap_or(None)
    }

    /// Replaces the T-zero, persists its canonical string form, and notifies
    /// observers in registration order.
    pub fn set(&self, instant: Timestamp) -> Result<()> {
        self.db.put_setting(TZERO_KEY, &instant.to_string())?;
        self.value.publish(Some(instant));
        Ok(())
    }

    /// Clears the T-zero, removes the persisted entry, and notifies
    /// observers.
    pub fn clear(&self) -> Result<()> {
        self.db.remove_setting(TZERO_KEY)?;
        self.value.publish(None);
        Ok(())
    }

    /// Observes every T-zero change until the subscription is dropped.
    pub fn watch(
        &self,
        listener: impl Fn(&Option<Timestamp>) + Send + Sync + 'static,
    ) -> Subscription {
        self.value.subscribe(listener)
    }

    /// Hands the underlying signal to in-crate collaborators (the timer
    /// combines it with the mission-time feed).
    pub(crate) fn signal(&self) -> Signal<Option<Timestamp>> {
        self.value.clone()
    }
}
