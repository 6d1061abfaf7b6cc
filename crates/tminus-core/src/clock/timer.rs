//! Elapsed-time derivation combining the mission-time feed with T-zero.

use jiff::Timestamp;

use super::store::TZeroStore;
use crate::signal::{Signal, Subscription};

/// Continuously derives the signed elapsed duration between the latest
/// mission time and the current T-zero.
///
/// Each mission-time push and each T-zero change triggers exactly one
/// recomputation, published to the elapsed signal. The derived value is never
/// cached across a T-zero change: it is always recomputed from the latest
/// value of both inputs. While either input is missing the derived value is
/// unknown (`None`), not zero and not stale.
pub struct MissionTimer {
    mission_time: Signal<Timestamp>,
    elapsed: Signal<Option<i64>>,
    _feed_subscription: Subscription,
    _tzero_subscription: Subscription,
}

fn derive_elapsed(
    mission_time: &Signal<Timestamp>,
    t_zero: &Signal<Option<Timestamp>>,
) -> Option<i64> {
    match (mission_time.latest(), t_zero.latest().unwrap_or(None)) {
        (Some(time), Some(t_zero)) => Some(time.as_millisecond() - t_zero.as_millisecond()),
        _ => None,
    }
}

impl MissionTimer {
    /// Wires the derivation against the given store.
    pub(crate) fn new(store: &TZeroStore) -> Self {
        let mission_time: Signal<Timestamp> = Signal::new();
        let t_zero = store.signal();
        let elapsed: Signal<Option<i64>> = Signal::new();

        let feed_subscription = mission_time.subscribe({
            let mission_time = mission_time.clone();
            let t_zero = t_zero.clone();
            let elapsed = elapsed.clone();
            move |_| elapsed.publish(derive_elapsed(&mission_time, &t_zero))
        });

        let tzero_subscription = store.watch({
            let mission_time = mission_time.clone();
            let t_zero = t_zero.clone();
            let elapsed = elapsed.clone();
            move |_| elapsed.publish(derive_elapsed(&mission_time, &t_zero))
        });

        // Seed the derived signal so consumers observe "unknown" immediately.
        elapsed.publish(derive_elapsed(&mission_time, &t_zero));

        Self {
            mission_time,
            elapsed,
            _feed_subscription: feed_subscription,
            _tzero_subscription: tzero_subscription,
        }
    }

    /// Feeds the latest mission time into the derivation.
    pub fn push(&self, time: Timestamp) {
        self.mission_time.publish(time);
    }

    /// Returns the latest mission time received, if any.
    pub fn mission_time(&self) -> Option<Timestamp> {
        self.mission_time.latest()
    }

    /// Returns the latest derived elapsed duration in milliseconds.
    ///
    /// `None` means unknown: no mission time received yet, or no T-zero set.
    pub fn elapsed(&self) -> Option<i64> {
        self.elapsed.latest().unwrap_or(None)
    }

    /// Observes every recomputation of the elapsed duration until the
    /// subscription is dropped.
    pub fn watch_elapsed(
        &self,
        listener: impl Fn(&Option<i64>) + Send + Sync + 'static,
    ) -> Subscription {
        self.elapsed.subscribe(listener)
    }
}
