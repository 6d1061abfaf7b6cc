//! Latest-value signal primitive.
//!
//! A [`Signal`] holds the most recent value published to it and a list of
//! registered listeners. Publishing stores the value and invokes every
//! listener synchronously, in registration order. Dropping the
//! [`Subscription`] returned by [`Signal::subscribe`] removes the listener,
//! giving observers an explicit teardown tied to their own lifetime.
//!
//! Listeners run outside the internal lock, so a listener may read
//! [`Signal::latest`] (on this or any other signal) without deadlocking.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    latest: Option<T>,
    listeners: Vec<(u64, Listener<T>)>,
    next_id: u64,
}

/// A shareable subject holding the latest published value.
pub struct Signal<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

fn lock_inner<T>(inner: &Mutex<Inner<T>>) -> MutexGuard<'_, Inner<T>> {
    // A poisoned lock only means a listener panicked; the data is still valid.
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<T: Clone + Send + 'static> Signal<T> {
    /// Creates a signal with no value and no listeners.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                latest: None,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Stores `value` as the latest and notifies listeners in registration
    /// order.
    pub fn publish(&self, value: T) {
        let listeners: Vec<Listener<T>> = {
            let mut inner = lock_inner(&self.inner);
            inner.latest = Some(value.clone());
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in &listeners {
            listener(&value);
        }
    }

    /// Returns a clone of the most recently published value, if any.
    pub fn latest(&self) -> Option<T> {
        lock_inner(&self.inner).latest.clone()
    }

    /// Registers a listener for subsequent publishes.
    ///
    /// The listener is not replayed the current value; callers that need it
    /// read [`Signal::latest`] first. The listener stays registered until the
    /// returned [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut inner = lock_inner(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::new(listener)));
            id
        };

        let weak = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = Weak::upgrade(&weak) {
                lock_inner(&inner).listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

impl<T: Clone + Send + 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Listener registration handle. Dropping it unregisters the listener.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unregisters the listener immediately.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_latest_tracks_last_publish() {
        let signal = Signal::new();
        assert_eq!(signal.latest(), None);

        signal.publish(1);
        signal.publish(2);
        assert_eq!(signal.latest(), Some(2));
    }

    #[test]
    fn test_listeners_notified_in_registration_order() {
        let signal: Signal<i32> = Signal::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let first = {
            let seen = Arc::clone(&seen);
            signal.subscribe(move |v| seen.lock().unwrap().push(("first", *v)))
        };
        let second = {
            let seen = Arc::clone(&seen);
            signal.subscribe(move |v| seen.lock().unwrap().push(("second", *v)))
        };

        signal.publish(7);
        assert_eq!(*seen.lock().unwrap(), vec![("first", 7), ("second", 7)]);

        drop(first);
        drop(second);
    }

    #[test]
    fn test_dropped_subscription_stops_notifications() {
        let signal: Signal<i32> = Signal::new();
        let count = Arc::new(Mutex::new(0));

        let subscription = {
            let count = Arc::clone(&count);
            signal.subscribe(move |_| *count.lock().unwrap() += 1)
        };

        signal.publish(1);
        drop(subscription);
        signal.publish(2);

        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_listener_can_read_latest_reentrantly() {
        let signal: Signal<i32> = Signal::new();
        let observed = Arc::new(Mutex::new(None));

        let subscription = {
            let reader = signal.clone();
            let observed = Arc::clone(&observed);
            signal.subscribe(move |_| {
                *observed.lock().unwrap() = reader.latest();
            })
        };

        signal.publish(42);
        assert_eq!(*observed.lock().unwrap(), Some(42));

        drop(subscription);
    }

    #[test]
    fn test_unsubscribe_is_idempotent_with_later_publishes() {
        let signal: Signal<i32> = Signal::new();
        let count = Arc::new(Mutex::new(0));

        let subscription = {
            let count = Arc::clone(&count);
            signal.subscribe(move |_| *count.lock().unwrap() += 1)
        };

        subscription.unsubscribe();
        signal.publish(9);

        assert_eq!(*count.lock().unwrap(), 0);
    }
}
