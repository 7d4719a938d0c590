//! Observer lifetime management
//!
//! Subscribing to a [`Signal`](crate::Signal) or
//! [`EventStream`](crate::EventStream) returns a [`Subscription`] guard.
//! Dropping the guard removes the observer from the source, so an observer
//! can never fire after its owner is gone. A [`SubscriptionSet`] collects
//! guards whose lifetime should match an owning widget or screen.

/// RAII guard for a registered observer.
///
/// The observer stays registered for as long as the guard is alive. Dropping
/// (or [`cancel`](Subscription::cancel)ing) the guard removes it exactly
/// once; [`detach`](Subscription::detach) leaves the observer registered for
/// the lifetime of the source instead.
pub struct Subscription {
    remove: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub(crate) fn new(remove: impl FnOnce() + Send + 'static) -> Self {
        Self {
            remove: Some(Box::new(remove)),
        }
    }

    /// Remove the observer from its source now.
    pub fn cancel(mut self) {
        self.release();
    }

    /// Keep the observer registered for the lifetime of the source.
    pub fn detach(mut self) {
        self.remove = None;
    }

    fn release(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.remove.is_some())
            .finish()
    }
}

/// A bag of subscriptions scoped to an owner.
///
/// Widgets and screens keep their bindings in a set so that every observer
/// is released exactly once, when the owner is dropped.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tie a subscription's lifetime to this set.
    pub fn add(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Release every held subscription now.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::Signal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_drop_releases_observer() {
        let signal = Signal::new(0i32);
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_clone = hits.clone();
        let sub = signal.subscribe(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(hits.load(Ordering::SeqCst), 1); // replay on subscribe

        drop(sub);
        signal.set(1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(signal.observer_count(), 0);
    }

    #[test]
    fn test_cancel_releases_observer() {
        let signal = Signal::new(0i32);
        let sub = signal.subscribe(|_| {});
        assert_eq!(signal.observer_count(), 1);

        sub.cancel();
        assert_eq!(signal.observer_count(), 0);
    }

    #[test]
    fn test_detach_keeps_observer() {
        let signal = Signal::new(0i32);
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_clone = hits.clone();
        signal
            .subscribe(move |_| {
                hits_clone.fetch_add(1, Ordering::SeqCst);
            })
            .detach();

        signal.set(1);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(signal.observer_count(), 1);
    }

    #[test]
    fn test_release_after_source_drop_is_harmless() {
        let signal = Signal::new(0i32);
        let sub = signal.subscribe(|_| {});

        drop(signal);
        drop(sub); // source already gone, removal is a no-op
    }

    #[test]
    fn test_clear_releases_everything() {
        let signal = Signal::new(0i32);
        let hits = Arc::new(AtomicUsize::new(0));

        let mut set = SubscriptionSet::new();
        for _ in 0..3 {
            let hits_clone = hits.clone();
            set.add(signal.subscribe(move |_| {
                hits_clone.fetch_add(1, Ordering::SeqCst);
            }));
        }
        assert_eq!(set.len(), 3);
        assert_eq!(signal.observer_count(), 3);

        set.clear();
        assert!(set.is_empty());
        assert_eq!(signal.observer_count(), 0);

        signal.set(1);
        assert_eq!(hits.load(Ordering::SeqCst), 3); // replays only
    }
}
