#![forbid(unsafe_code)]

//! Shared value holder with synchronous change broadcast.
//!
//! # Design
//!
//! [`Subject<T>`] wraps a value of type `T` in shared, reference-counted
//! storage (`Rc<RefCell<..>>`). Every mutating call notifies all registered
//! listeners with the new value — unconditionally, not gated on whether the
//! value compares different. A counter that is incremented and then
//! decremented ends where it started, yet both calls are mutations and both
//! are broadcast.
//!
//! Listeners are registered under an opaque token; the token's RAII guard
//! ([`Subscription`]) removes the listener the moment it is dropped. This is
//! the explicit acquire/release lifecycle: a display component subscribes
//! when it mounts, holds the guard, and its teardown path releases it.
//!
//! # Failure Modes
//!
//! - **Re-entrant mutation**: calling `set()`/`update()` from within a
//!   listener panics (RefCell borrow rules). Re-entrant mutation indicates a
//!   design bug in the subscriber graph. Reading (`get`, `with`) from a
//!   listener is fine: listeners run after the borrow is released.
//! - **Panicking listener**: not caught; the panic unwinds through the
//!   notification pass.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

/// Opaque registration token. Unique per subject for the subject's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ListenerId(u64);

type Callback<T> = Rc<dyn Fn(&T)>;

/// Shared interior for [`Subject<T>`].
struct SubjectInner<T> {
    value: T,
    version: u64,
    next_id: u64,
    listeners: Vec<(ListenerId, Callback<T>)>,
}

/// A shared, mutable value that broadcasts every mutation to its listeners.
///
/// Cloning a `Subject` creates a new handle to the **same** inner state —
/// both handles see the same value and share listeners. The subject is
/// single-threaded by construction (`Rc`, not `Arc`): all mutation and
/// notification happen synchronously on the calling thread.
pub struct Subject<T> {
    inner: Rc<RefCell<SubjectInner<T>>>,
}

// Manual Clone: shares the same Rc.
impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Subject")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("listener_count", &inner.listeners.len())
            .finish()
    }
}

impl<T: Clone + 'static> Subject<T> {
    /// Create a new subject with the given initial value.
    ///
    /// The initial version is 0 and no listeners are registered.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SubjectInner {
                value,
                version: 0,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value. No side effects.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Access the current value by reference without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replace the value and notify every registered listener.
    ///
    /// # Panics
    ///
    /// Panics if called re-entrantly from within a listener.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    /// Mutate the value in place and notify every registered listener.
    ///
    /// The closure always counts as a mutation, even if it leaves the value
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if called re-entrantly from within a listener.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut inner = self.inner.borrow_mut();
            f(&mut inner.value);
            inner.version += 1;
        }
        self.notify();
    }

    /// Register a listener, invoked with the new value on every mutation.
    ///
    /// Returns a [`Subscription`] guard; dropping it (or calling
    /// [`Subscription::cancel`]) removes the listener. The listener is never
    /// invoked after its guard is gone.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = ListenerId(inner.next_id);
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(callback)));
            id
        };
        let weak = Rc::downgrade(&self.inner);
        Subscription {
            remove: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    /// Number of mutations applied so far. Useful for dirty-checking.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Invoke every registered listener with the current value.
    ///
    /// Callbacks are collected first and run after the borrow is released,
    /// so listeners may read the subject freely.
    fn notify(&self) {
        let (value, callbacks): (T, Vec<Callback<T>>) = {
            let inner = self.inner.borrow();
            (
                inner.value.clone(),
                inner.listeners.iter().map(|(_, cb)| Rc::clone(cb)).collect(),
            )
        };
        trace!(listeners = callbacks.len(), "subject notify");
        for cb in &callbacks {
            cb(&value);
        }
    }
}

/// RAII guard for a registered listener.
///
/// Dropping the guard removes the listener from its subject. Outliving the
/// subject is fine: removal becomes a no-op once the subject is gone.
pub struct Subscription {
    remove: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Remove the listener now instead of at drop.
    pub fn cancel(mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn get_set_basic() {
        let subject = Subject::new(42);
        assert_eq!(subject.get(), 42);
        assert_eq!(subject.version(), 0);

        subject.set(99);
        assert_eq!(subject.get(), 99);
        assert_eq!(subject.version(), 1);
    }

    #[test]
    fn every_mutation_notifies_even_without_change() {
        let subject = Subject::new(7);
        let count = Rc::new(Cell::new(0u32));
        let count_probe = Rc::clone(&count);

        let _sub = subject.subscribe(move |_| count_probe.set(count_probe.get() + 1));

        subject.set(7);
        subject.update(|_| {});
        assert_eq!(count.get(), 2);
        assert_eq!(subject.version(), 2);
    }

    #[test]
    fn with_access() {
        let subject = Subject::new(vec![1, 2, 3]);
        let sum = subject.with(|v| v.iter().sum::<i32>());
        assert_eq!(sum, 6);
    }

    #[test]
    fn update_mutates_in_place() {
        let subject = Subject::new(vec![1, 2, 3]);
        subject.update(|v| v.push(4));
        assert_eq!(subject.get(), vec![1, 2, 3, 4]);
        assert_eq!(subject.version(), 1);
    }

    #[test]
    fn listener_receives_new_value() {
        let subject = Subject::new(0);
        let last_seen = Rc::new(Cell::new(0));
        let probe = Rc::clone(&last_seen);

        let _sub = subject.subscribe(move |val| probe.set(*val));

        subject.set(42);
        assert_eq!(last_seen.get(), 42);

        subject.update(|v| *v += 1);
        assert_eq!(last_seen.get(), 43);
    }

    #[test]
    fn drop_unsubscribes_immediately() {
        let subject = Subject::new(0);
        let count = Rc::new(Cell::new(0u32));
        let probe = Rc::clone(&count);

        let sub = subject.subscribe(move |_| probe.set(probe.get() + 1));
        assert_eq!(subject.listener_count(), 1);

        subject.set(1);
        assert_eq!(count.get(), 1);

        drop(sub);
        assert_eq!(subject.listener_count(), 0);

        subject.set(2);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn cancel_unsubscribes() {
        let subject = Subject::new(0);
        let count = Rc::new(Cell::new(0u32));
        let probe = Rc::clone(&count);

        let sub = subject.subscribe(move |_| probe.set(probe.get() + 1));
        sub.cancel();

        subject.set(1);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn partial_drop_leaves_others_delivering() {
        let subject = Subject::new(0);
        let a = Rc::new(Cell::new(0u32));
        let b = Rc::new(Cell::new(0u32));
        let a_probe = Rc::clone(&a);
        let b_probe = Rc::clone(&b);

        let sub_a = subject.subscribe(move |_| a_probe.set(a_probe.get() + 1));
        let _sub_b = subject.subscribe(move |_| b_probe.set(b_probe.get() + 1));

        subject.set(1);
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 1);

        drop(sub_a);

        subject.set(2);
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
    }

    #[test]
    fn all_listeners_see_the_same_value() {
        let subject = Subject::new(0);
        let a = Rc::new(Cell::new(-1));
        let b = Rc::new(Cell::new(-1));
        let a_probe = Rc::clone(&a);
        let b_probe = Rc::clone(&b);

        let _sub_a = subject.subscribe(move |v| a_probe.set(*v));
        let _sub_b = subject.subscribe(move |v| b_probe.set(*v));

        for expected in [5, -3, 0] {
            subject.set(expected);
            assert_eq!(a.get(), expected);
            assert_eq!(b.get(), expected);
        }
    }

    #[test]
    fn clone_shares_state_and_listeners() {
        let subject = Subject::new(0);
        let count = Rc::new(Cell::new(0u32));
        let probe = Rc::clone(&count);

        let _sub = subject.subscribe(move |_| probe.set(probe.get() + 1));

        let handle = subject.clone();
        handle.set(5);
        assert_eq!(subject.get(), 5);
        assert_eq!(subject.version(), 1);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn listener_may_read_subject() {
        let subject = Subject::new(10);
        let seen = Rc::new(Cell::new(0));
        let probe = Rc::clone(&seen);
        let handle = subject.clone();

        let _sub = subject.subscribe(move |_| probe.set(handle.get()));

        subject.set(11);
        assert_eq!(seen.get(), 11);
    }

    #[test]
    fn subscription_outlives_subject() {
        let sub;
        {
            let subject = Subject::new(1);
            sub = subject.subscribe(|_| {});
        }
        // Subject is gone; dropping the guard must not panic.
        drop(sub);
    }

    #[test]
    fn version_counts_mutations() {
        let subject = Subject::new(0);
        for i in 1..=100 {
            subject.update(|v| *v = i);
        }
        assert_eq!(subject.version(), 100);
        assert_eq!(subject.get(), 100);
    }

    #[test]
    fn debug_format() {
        let subject = Subject::new(42);
        let dbg = format!("{subject:?}");
        assert!(dbg.contains("Subject"));
        assert!(dbg.contains("42"));
        assert!(dbg.contains("version"));
    }
}
