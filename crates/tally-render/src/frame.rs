#![forbid(unsafe_code)]

//! Frame = Buffer + metadata for one render pass.
//!
//! The `Frame` is the render target that `Model::view()` methods write to.
//! It bundles the cell grid ([`Buffer`]) with the cursor position to show
//! after present (if any).
//!
//! # Usage
//!
//! ```
//! use tally_render::frame::Frame;
//!
//! let mut frame = Frame::new(80, 24);
//! frame.buffer.set_string(0, 0, "Hi");
//! frame.set_cursor(Some((2, 0)));
//! ```

use tally_core::geometry::Rect;

use crate::buffer::Buffer;

/// The render target for a single view pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The cell grid widgets draw into.
    pub buffer: Buffer,
    cursor: Option<(u16, u16)>,
}

impl Frame {
    /// Create a blank frame.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is 0.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            cursor: None,
        }
    }

    /// The full frame area as a [`Rect`] at the origin.
    #[inline]
    #[must_use]
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.buffer.width(), self.buffer.height())
    }

    /// Set (or clear) the cursor position to show after present.
    #[inline]
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor = position;
    }

    /// The cursor position requested by the last view pass.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Blank the frame for the next view pass. Clears the cursor request.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_covers_buffer() {
        let frame = Frame::new(10, 4);
        assert_eq!(frame.area(), Rect::new(0, 0, 10, 4));
    }

    #[test]
    fn reset_blanks_content_and_cursor() {
        let mut frame = Frame::new(10, 2);
        frame.buffer.set_string(0, 0, "abc");
        frame.set_cursor(Some((3, 0)));
        frame.reset();
        assert_eq!(frame.buffer.row_text(0), "");
        assert_eq!(frame.cursor(), None);
    }
}
