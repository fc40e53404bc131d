#![forbid(unsafe_code)]

//! The shared counter model and its subscriber panes.

use std::cell::Cell;
use std::rc::Rc;

use tally_runtime::{Subject, Subscription};
use tracing::debug;

/// One integer, shared by reference, broadcasting every mutation.
///
/// A single instance is created at startup and lives for the process.
/// Cloning produces another handle to the same state, not a copy.
#[derive(Debug, Clone)]
pub struct SharedCounter {
    subject: Subject<i64>,
}

impl SharedCounter {
    /// A counter starting at 0 with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subject: Subject::new(0),
        }
    }

    /// Add one and notify every subscriber.
    pub fn increment(&self) {
        self.subject.update(|v| *v += 1);
        debug!(value = self.value(), "increment");
    }

    /// Subtract one and notify every subscriber.
    ///
    /// The value is not clamped; counting below zero is allowed.
    pub fn decrement(&self) {
        self.subject.update(|v| *v -= 1);
        debug!(value = self.value(), "decrement");
    }

    /// The current value. No side effects.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.subject.get()
    }

    /// Register a subscriber, invoked with the new value on every mutation.
    pub fn subscribe(&self, callback: impl Fn(&i64) + 'static) -> Subscription {
        self.subject.subscribe(callback)
    }

    /// Number of mutations so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.subject.version()
    }

    /// Number of currently subscribed listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subject.listener_count()
    }
}

impl Default for SharedCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// A display pane subscribed to the shared counter.
///
/// The pane holds only a read copy of the value, refreshed by its
/// subscription callback on every broadcast, plus the RAII guard that keeps
/// the subscription alive. Dropping the pane is its teardown path: the guard
/// goes with it and the model stops notifying it.
#[derive(Debug)]
pub struct SubscriberPane {
    name: &'static str,
    seen: Rc<Cell<i64>>,
    _subscription: Subscription,
}

impl SubscriberPane {
    /// Mount a pane: read the current value, then subscribe for updates.
    #[must_use]
    pub fn mount(name: &'static str, counter: &SharedCounter) -> Self {
        let seen = Rc::new(Cell::new(counter.value()));
        let probe = Rc::clone(&seen);
        let subscription = counter.subscribe(move |v| probe.set(*v));
        debug!(pane = name, "pane mounted");
        Self {
            name,
            seen,
            _subscription: subscription,
        }
    }

    /// The pane's display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The value this pane last observed.
    #[must_use]
    pub fn seen(&self) -> i64 {
        self.seen.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let counter = SharedCounter::new();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.version(), 0);
        assert_eq!(counter.subscriber_count(), 0);
    }

    #[test]
    fn increment_then_decrement_restores_value_but_notifies_twice() {
        let counter = SharedCounter::new();
        let notifications = Rc::new(Cell::new(0u32));
        let probe = Rc::clone(&notifications);
        let _sub = counter.subscribe(move |_| probe.set(probe.get() + 1));

        counter.increment();
        counter.decrement();

        assert_eq!(counter.value(), 0);
        assert_eq!(notifications.get(), 2);
        assert_eq!(counter.version(), 2);
    }

    #[test]
    fn decrement_is_not_clamped() {
        let counter = SharedCounter::new();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.value(), -2);
    }

    #[test]
    fn example_scenario_two_panes() {
        // Model at 0 → three increments → both panes report 3 →
        // one decrement → both panes report 2.
        let counter = SharedCounter::new();
        let pane_a = SubscriberPane::mount("A", &counter);
        let pane_b = SubscriberPane::mount("B", &counter);

        counter.increment();
        counter.increment();
        counter.increment();
        assert_eq!(counter.value(), 3);
        assert_eq!(pane_a.seen(), 3);
        assert_eq!(pane_b.seen(), 3);

        counter.decrement();
        assert_eq!(counter.value(), 2);
        assert_eq!(pane_a.seen(), 2);
        assert_eq!(pane_b.seen(), 2);
    }

    #[test]
    fn unmounted_pane_stops_observing_others_still_deliver() {
        let counter = SharedCounter::new();
        let pane_a = SubscriberPane::mount("A", &counter);
        let pane_b = SubscriberPane::mount("B", &counter);
        assert_eq!(counter.subscriber_count(), 2);

        counter.increment();
        let frozen = pane_b.seen();
        drop(pane_b);
        assert_eq!(counter.subscriber_count(), 1);

        counter.increment();
        counter.increment();
        assert_eq!(pane_a.seen(), 3);
        assert_eq!(counter.value(), 3);
        // The dropped pane's last observation never moved past unmount.
        assert_eq!(frozen, 1);
    }

    #[test]
    fn late_mount_reads_current_value() {
        let counter = SharedCounter::new();
        counter.increment();
        counter.increment();

        let pane = SubscriberPane::mount("late", &counter);
        assert_eq!(pane.seen(), 2);
    }

    #[test]
    fn clones_share_the_model() {
        let counter = SharedCounter::new();
        let handle = counter.clone();
        handle.increment();
        assert_eq!(counter.value(), 1);
    }
}
