#![forbid(unsafe_code)]

//! Elm-style runtime and change notification for the Tally demos.
//!
//! # Role in Tally
//! `tally-runtime` drives applications: it owns the event loop that turns
//! terminal input into model messages, runs `update()`, and presents the
//! frames produced by `view()`. It also hosts the [`reactive`] module, the
//! shared-state notification primitive the shared-counter demo is built on.
//!
//! Applications implement [`Model`] and hand an instance to [`Program`].

pub mod program;
pub mod reactive;

pub use program::{Cmd, Model, Program, ProgramConfig};
pub use reactive::{Subject, Subscription};
