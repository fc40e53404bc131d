#![forbid(unsafe_code)]

//! Presentational widgets for the Tally demos.
//!
//! Widgets are pure renderers: they hold borrowed display inputs, never
//! state, and write into the [`Frame`] they are given. State lives in the
//! application model (or, for the shared demo, in the shared subject); the
//! runtime decides when a widget is re-rendered.

pub mod block;
pub mod borders;
pub mod button;
pub mod counter;

use tally_core::geometry::Rect;
use tally_render::frame::Frame;
use unicode_width::UnicodeWidthStr;

/// A renderable UI component.
pub trait Widget {
    /// Render into `area` of the frame. Implementations render nothing for
    /// empty areas and clip at the area's right edge.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// Write `text` at (x, y), clipped to the column `right` (exclusive).
///
/// Returns the number of columns written.
pub(crate) fn draw_text(frame: &mut Frame, x: u16, y: u16, text: &str, right: u16) -> u16 {
    if x >= right {
        return 0;
    }
    let budget = (right - x) as usize;
    let mut fits = text.len();
    if text.width() > budget {
        let mut used = 0;
        for (i, ch) in text.char_indices() {
            let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + w > budget {
                fits = i;
                break;
            }
            used += w;
        }
    }
    frame.buffer.set_string(x, y, &text[..fits])
}

/// Starting column that centers `width` columns of content inside `area`.
pub(crate) fn centered_x(area: Rect, width: u16) -> u16 {
    if width >= area.width {
        area.x
    } else {
        area.x + (area.width - width) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_text_clips_to_right_bound() {
        let mut frame = Frame::new(10, 1);
        let written = draw_text(&mut frame, 1, 0, "abcdef", 4);
        assert_eq!(written, 3);
        assert_eq!(frame.buffer.row_text(0), " abc");
    }

    #[test]
    fn draw_text_past_bound_writes_nothing() {
        let mut frame = Frame::new(10, 1);
        assert_eq!(draw_text(&mut frame, 5, 0, "abc", 5), 0);
        assert_eq!(frame.buffer.row_text(0), "");
    }

    #[test]
    fn centered_x_centers_or_pins_left() {
        let area = Rect::new(2, 0, 10, 1);
        assert_eq!(centered_x(area, 4), 5);
        assert_eq!(centered_x(area, 11), 2);
    }
}
