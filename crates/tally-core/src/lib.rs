#![forbid(unsafe_code)]

//! Core: terminal lifecycle, events, and geometry for the Tally demos.
//!
//! # Role in Tally
//! `tally-core` is the input layer. It owns terminal session setup/teardown
//! and the normalized event types the runtime consumes.
//!
//! # Primary responsibilities
//! - **TerminalSession**: RAII lifecycle for raw mode, alt-screen, and cleanup.
//! - **Event**: canonical input events (keys, mouse, resize, focus).
//! - **Rect**: the cell-grid rectangles widgets render into.
//!
//! # How it fits in the system
//! The runtime (`tally-runtime`) consumes `tally_core::Event` values and
//! drives application models. The render kernel (`tally-render`) is
//! independent of input, so `tally-core` is the bridge between terminal I/O
//! and the deterministic render path.

pub mod event;
pub mod geometry;

#[cfg(all(feature = "crossterm", not(target_arch = "wasm32")))]
pub mod terminal_session;
