//! Push-based observable values
//!
//! A [`Signal`] holds a current value and a list of observers. Writes go
//! through [`set`](Signal::set), which suppresses consecutive duplicates and
//! then notifies observers synchronously, in subscription order, on the
//! writing thread. New observers receive the current value immediately, so a
//! signal behaves as a continuous value rather than a stream of edits.
//!
//! Observers run with no internal lock held, so an observer may read or
//! write *other* signals as part of the same emission. Feedback loops
//! between distinct signals are therefore safe; a signal must not set
//! itself from its own observer.

use std::sync::{Arc, Mutex};

use smallvec::SmallVec;
use tracing::trace;

use crate::subscription::Subscription;

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct SignalInner<T> {
    name: &'static str,
    value: T,
    next_observer_id: u64,
    observers: SmallVec<[(u64, Observer<T>); 4]>,
}

/// A continuous observable value (cheap to clone, shared handle).
pub struct Signal<T> {
    inner: Arc<Mutex<SignalInner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> Signal<T> {
    /// Create an unnamed signal with an initial value.
    pub fn new(initial: T) -> Self {
        Self::named("", initial)
    }

    /// Create a signal with a name used in trace output.
    pub fn named(name: &'static str, initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SignalInner {
                name,
                value: initial,
                next_observer_id: 0,
                observers: SmallVec::new(),
            })),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.inner.lock().unwrap().value.clone()
    }

    /// Set a new value and notify observers.
    ///
    /// Setting the value the signal already holds is a no-op: consecutive
    /// duplicates are suppressed, so every delivery observers see is an
    /// actual change.
    pub fn set(&self, value: T) {
        let observers: SmallVec<[Observer<T>; 4]> = {
            let mut inner = self.inner.lock().unwrap();
            if inner.value == value {
                return;
            }
            inner.value = value.clone();
            trace!(
                signal = inner.name,
                observers = inner.observers.len(),
                "value changed"
            );
            inner.observers.iter().map(|(_, f)| f.clone()).collect()
        };

        // Lock released before observers run.
        for observer in &observers {
            observer(&value);
        }
    }

    /// Update the value using a function.
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        let next = f(self.get());
        self.set(next);
    }

    /// Register an observer.
    ///
    /// The observer is invoked immediately with the current value, then on
    /// every change, until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, observer: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let observer: Observer<T> = Arc::new(observer);

        let (id, current) = {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.next_observer_id;
            inner.next_observer_id += 1;
            inner.observers.push((id, observer.clone()));
            (id, inner.value.clone())
        };

        observer(&current);

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

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.lock().unwrap().observers.len()
    }
}

impl<T: Clone + PartialEq + Send + Default + 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_signal_create_get_set() {
        let count = Signal::new(0i32);
        assert_eq!(count.get(), 0);

        count.set(42);
        assert_eq!(count.get(), 42);
    }

    #[test]
    fn test_signal_update() {
        let count = Signal::new(10i32);
        count.update(|n| n + 5);
        assert_eq!(count.get(), 15);
    }

    #[test]
    fn test_replays_current_value_on_subscribe() {
        let flag = Signal::new(true);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        let _sub = flag.subscribe(move |v| seen_clone.lock().unwrap().push(*v));

        assert_eq!(*seen.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_delivers_every_change() {
        let count = Signal::new(0i32);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        let _sub = count.subscribe(move |v| seen_clone.lock().unwrap().push(*v));

        count.set(1);
        count.set(2);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_suppresses_consecutive_duplicates() {
        let flag = Signal::new(false);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        let _sub = flag.subscribe(move |v| seen_clone.lock().unwrap().push(*v));

        flag.set(true);
        flag.set(true);
        flag.set(true);
        flag.set(false);
        assert_eq!(*seen.lock().unwrap(), vec![false, true, false]);
    }

    #[test]
    fn test_observers_fire_in_subscription_order() {
        let count = Signal::new(0i32);
        let order = Arc::new(Mutex::new(Vec::new()));

        let order_a = order.clone();
        let _first = count.subscribe(move |_| order_a.lock().unwrap().push("first"));
        let order_b = order.clone();
        let _second = count.subscribe(move |_| order_b.lock().unwrap().push("second"));

        order.lock().unwrap().clear();
        count.set(1);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_observer_may_write_another_signal() {
        let source = Signal::new(0i32);
        let mirror = Signal::new(0i32);

        let mirror_clone = mirror.clone();
        let _sub = source.subscribe(move |v| mirror_clone.set(*v));

        source.set(7);
        assert_eq!(mirror.get(), 7);
    }

    #[test]
    fn test_shared_handles_observe_the_same_value() {
        let a = Signal::new(1i32);
        let b = a.clone();

        b.set(2);
        assert_eq!(a.get(), 2);
    }
}
