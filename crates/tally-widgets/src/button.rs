#![forbid(unsafe_code)]

//! Clickable button row.
//!
//! The row renders its buttons and exposes their rects through
//! [`ButtonRow::layout`]. Applications call `layout` with the same area from
//! both `view()` (to render) and their mouse handler (to hit-test a click),
//! so the widget itself never holds callbacks or state.

use crate::{Widget, centered_x, draw_text};
use tally_core::geometry::Rect;
use tally_render::frame::Frame;
use unicode_width::UnicodeWidthStr;

/// Horizontal gap between buttons, in cells.
const BUTTON_GAP: u16 = 2;

/// A horizontal row of `[ label ]` buttons, centered in its area.
#[derive(Debug, Clone, Default)]
pub struct ButtonRow<'a> {
    labels: &'a [&'a str],
}

impl<'a> ButtonRow<'a> {
    /// Create a row with the given button labels.
    #[must_use]
    pub fn new(labels: &'a [&'a str]) -> Self {
        Self { labels }
    }

    fn button_width(label: &str) -> u16 {
        // "[ " + label + " ]"
        label.width() as u16 + 4
    }

    /// The rect each button occupies inside `area`, in label order.
    ///
    /// Buttons that do not fit are given empty rects; hit tests against an
    /// empty rect never match.
    #[must_use]
    pub fn layout(&self, area: Rect) -> Vec<Rect> {
        let total: u16 = self
            .labels
            .iter()
            .map(|l| Self::button_width(l))
            .sum::<u16>()
            + BUTTON_GAP * self.labels.len().saturating_sub(1) as u16;

        let mut x = centered_x(area, total);
        let y = area.y + area.height / 2;

        self.labels
            .iter()
            .map(|label| {
                let width = Self::button_width(label);
                let rect = if area.is_empty() || x.saturating_add(width) > area.right() {
                    Rect::default()
                } else {
                    Rect::new(x, y, width, 1)
                };
                x = x.saturating_add(width + BUTTON_GAP);
                rect
            })
            .collect()
    }

    /// Index of the button containing the cell (x, y), if any.
    #[must_use]
    pub fn hit(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        self.layout(area)
            .iter()
            .position(|rect| rect.contains(x, y))
    }
}

impl Widget for ButtonRow<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "ButtonRow",
            buttons = self.labels.len()
        )
        .entered();

        if area.is_empty() {
            return;
        }

        for (label, rect) in self.labels.iter().zip(self.layout(area)) {
            if rect.is_empty() {
                continue;
            }
            draw_text(frame, rect.x, rect.y, &format!("[ {label} ]"), rect.right());
        }
    }
}
