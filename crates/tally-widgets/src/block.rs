#![forbid(unsafe_code)]

use crate::Widget;
use crate::borders::{BorderSet, BorderType, Borders};
use crate::draw_text;
use tally_core::geometry::Rect;
use tally_render::buffer::Buffer;
use tally_render::cell::Cell;
use tally_render::frame::Frame;

/// A widget that draws a block with optional borders and a title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block<'a> {
    borders: Borders,
    border_type: BorderType,
    title: Option<&'a str>,
}

impl<'a> Block<'a> {
    /// Create a new block with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a block with all borders enabled.
    #[must_use]
    pub fn bordered() -> Self {
        Self::default().borders(Borders::ALL)
    }

    /// Set which borders to render.
    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Set the border character set (square or rounded).
    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Set the block title displayed on the top border.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Compute the inner area inside the block's borders.
    #[must_use]
    pub fn inner(&self, area: Rect) -> Rect {
        let mut inner = area;

        if self.borders.contains(Borders::LEFT) {
            inner.x = inner.x.saturating_add(1);
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::TOP) {
            inner.y = inner.y.saturating_add(1);
            inner.height = inner.height.saturating_sub(1);
        }
        if self.borders.contains(Borders::RIGHT) {
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::BOTTOM) {
            inner.height = inner.height.saturating_sub(1);
        }

        inner
    }

    fn render_borders(&self, area: Rect, buf: &mut Buffer) {
        let set: BorderSet = self.border_type.to_border_set();

        // Edges
        if self.borders.contains(Borders::LEFT) {
            for y in area.y..area.bottom() {
                buf.set(area.x, y, Cell::from_char(set.vertical));
            }
        }
        if self.borders.contains(Borders::RIGHT) {
            let x = area.right() - 1;
            for y in area.y..area.bottom() {
                buf.set(x, y, Cell::from_char(set.vertical));
            }
        }
        if self.borders.contains(Borders::TOP) {
            for x in area.x..area.right() {
                buf.set(x, area.y, Cell::from_char(set.horizontal));
            }
        }
        if self.borders.contains(Borders::BOTTOM) {
            let y = area.bottom() - 1;
            for x in area.x..area.right() {
                buf.set(x, y, Cell::from_char(set.horizontal));
            }
        }

        // Corners
        if self.borders.contains(Borders::TOP | Borders::LEFT) {
            buf.set(area.x, area.y, Cell::from_char(set.top_left));
        }
        if self.borders.contains(Borders::TOP | Borders::RIGHT) {
            buf.set(area.right() - 1, area.y, Cell::from_char(set.top_right));
        }
        if self.borders.contains(Borders::BOTTOM | Borders::LEFT) {
            buf.set(area.x, area.bottom() - 1, Cell::from_char(set.bottom_left));
        }
        if self.borders.contains(Borders::BOTTOM | Borders::RIGHT) {
            buf.set(
                area.right() - 1,
                area.bottom() - 1,
                Cell::from_char(set.bottom_right),
            );
        }
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }

        self.render_borders(area, &mut frame.buffer);

        if let Some(title) = self.title
            && self.borders.contains(Borders::TOP)
            && area.width > 2
        {
            draw_text(frame, area.x + 1, area.y, title, area.right() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bordered_block_draws_box_and_title() {
        let mut frame = Frame::new(8, 3);
        Block::bordered().title("hi").render(frame.area(), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "┌hi────┐");
        assert_eq!(frame.buffer.row_text(1), "│      │");
        assert_eq!(frame.buffer.row_text(2), "└──────┘");
    }

    #[test]
    fn inner_accounts_for_enabled_borders() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(Block::bordered().inner(area), Rect::new(1, 1, 8, 3));
        assert_eq!(
            Block::new().borders(Borders::TOP).inner(area),
            Rect::new(0, 1, 10, 4)
        );
        assert_eq!(Block::new().inner(area), area);
    }

    #[test]
    fn empty_area_renders_nothing() {
        let mut frame = Frame::new(4, 2);
        Block::bordered().render(Rect::new(0, 0, 0, 2), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "");
    }
}
