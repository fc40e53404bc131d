#![forbid(unsafe_code)]

//! Change notification for shared application state.
//!
//! This module provides the publish/subscribe primitive behind the shared
//! counter demo:
//!
//! - [`Subject`]: a shared, mutable value that synchronously broadcasts every
//!   mutation to its registered listeners.
//! - [`Subscription`]: RAII guard that removes its listener on drop.
//!
//! # Architecture
//!
//! `Subject<T>` uses `Rc<RefCell<..>>` for single-threaded shared ownership.
//! Listeners are keyed by an opaque token and removed eagerly when their
//! [`Subscription`] is dropped or cancelled.
//!
//! # Invariants
//!
//! 1. Every mutating call (`set`, `update`) notifies each currently
//!    registered listener exactly once, synchronously, with the new value.
//! 2. The version counter increments by exactly 1 per mutating call.
//! 3. Dropping a [`Subscription`] removes its listener before the next
//!    mutating call; delivery to the remaining listeners is unaffected.
//! 4. Delivery order is unspecified.

pub mod subject;

pub use subject::{Subject, Subscription};
