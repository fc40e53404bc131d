#![forbid(unsafe_code)]

//! Counter value display.

use crate::block::Block;
use crate::{Widget, centered_x, draw_text};
use tally_core::geometry::Rect;
use tally_render::frame::Frame;
use unicode_width::UnicodeWidthStr;

/// A widget that displays a labelled counter value, centered.
///
/// Purely presentational: it borrows the label and copies the value; the
/// count itself lives wherever the application keeps its state.
#[derive(Debug, Clone, Default)]
pub struct CounterDisplay<'a> {
    block: Option<Block<'a>>,
    label: Option<&'a str>,
    value: i64,
}

impl<'a> CounterDisplay<'a> {
    /// Create a display for the given value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self {
            block: None,
            label: None,
            value,
        }
    }

    /// Set the surrounding block.
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set the label rendered above the value.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }
}

impl Widget for CounterDisplay<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "CounterDisplay",
            value = self.value
        )
        .entered();

        let content = match &self.block {
            Some(b) => {
                b.render(area, frame);
                b.inner(area)
            }
            None => area,
        };

        if content.is_empty() {
            return;
        }

        let mut y = content.y;
        if let Some(label) = self.label {
            let x = centered_x(content, label.width() as u16);
            draw_text(frame, x, y, label, content.right());
            y = y.saturating_add(1);
        }

        if y >= content.bottom() {
            return;
        }

        let text = self.value.to_string();
        let x = centered_x(content, text.width() as u16);
        // Put the value on the middle of the remaining rows.
        let value_y = y + (content.bottom() - y - 1) / 2;
        draw_text(frame, x, value_y, &text, content.right());
    }
}
