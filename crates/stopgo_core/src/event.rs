//! Discrete push-based events
//!
//! An [`EventStream`] is the discrete counterpart of
//! [`Signal`](crate::Signal): it has no current value and nothing is
//! replayed on subscription. [`emit`](EventStream::emit) delivers to
//! observers synchronously, in subscription order, on the emitting thread,
//! with no internal lock held while they run.

use std::sync::{Arc, Mutex};

use smallvec::SmallVec;
use tracing::trace;

use crate::subscription::Subscription;

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct StreamInner<T> {
    name: &'static str,
    next_observer_id: u64,
    observers: SmallVec<[(u64, Observer<T>); 2]>,
}

/// A discrete event source (cheap to clone, shared handle).
///
/// The payload type defaults to `()` for pure "it happened" events.
pub struct EventStream<T = ()> {
    inner: Arc<Mutex<StreamInner<T>>>,
}

impl<T> Clone for EventStream<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Send + 'static> EventStream<T> {
    /// Create an unnamed stream.
    pub fn new() -> Self {
        Self::named("")
    }

    /// Create a stream with a name used in trace output.
    pub fn named(name: &'static str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StreamInner {
                name,
                next_observer_id: 0,
                observers: SmallVec::new(),
            })),
        }
    }

    /// Register an observer. Nothing is delivered until the next emission.
    pub fn subscribe(&self, observer: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let observer: Observer<T> = Arc::new(observer);

        let id = {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.next_observer_id;
            inner.next_observer_id += 1;
            inner.observers.push((id, observer));
            id
        };

        let weak = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .lock()
                    .unwrap()
                    .observers
                    .retain(|(observer_id, _)| *observer_id != id);
            }
        })
    }

    /// Deliver an event to every observer.
    pub fn emit(&self, value: T) {
        let observers: SmallVec<[Observer<T>; 2]> = {
            let inner = self.inner.lock().unwrap();
            trace!(
                stream = inner.name,
                observers = inner.observers.len(),
                "event emitted"
            );
            inner.observers.iter().map(|(_, f)| f.clone()).collect()
        };

        // Lock released before observers run.
        for observer in &observers {
            observer(&value);
        }
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.lock().unwrap().observers.len()
    }
}

impl EventStream<()> {
    /// Emit a void event.
    pub fn fire(&self) {
        self.emit(());
    }
}

impl<T: Send + 'static> Default for EventStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_nothing_delivered_on_subscribe() {
        let taps = EventStream::<()>::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_clone = hits.clone();
        let _sub = taps.subscribe(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_emit_reaches_every_observer() {
        let values = EventStream::<i32>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_a = seen.clone();
        let _first = values.subscribe(move |v| seen_a.lock().unwrap().push(("first", *v)));
        let seen_b = seen.clone();
        let _second = values.subscribe(move |v| seen_b.lock().unwrap().push(("second", *v)));

        values.emit(9);
        assert_eq!(*seen.lock().unwrap(), vec![("first", 9), ("second", 9)]);
    }

    #[test]
    fn test_fire_void_events() {
        let taps = EventStream::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_clone = hits.clone();
        let _sub = taps.subscribe(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        taps.fire();
        taps.fire();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dropped_subscription_stops_delivery() {
        let taps = EventStream::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_clone = hits.clone();
        let sub = taps.subscribe(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        taps.fire();
        drop(sub);
        taps.fire();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(taps.observer_count(), 0);
    }
}
