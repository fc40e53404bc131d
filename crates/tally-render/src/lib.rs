#![forbid(unsafe_code)]

//! Render kernel: a deterministic cell grid for `Model::view()` to write to.
//!
//! # Role in Tally
//! `tally-render` owns the in-memory picture of the screen. The runtime hands
//! each view pass a [`frame::Frame`]; widgets write cells into its
//! [`buffer::Buffer`]; the runtime then presents the buffer through the
//! terminal backend. Nothing here touches I/O, which is what makes the whole
//! pipeline testable without a PTY: tests render into a frame and assert on
//! [`buffer::Buffer::row_text`].

pub mod buffer;
pub mod cell;
pub mod frame;
