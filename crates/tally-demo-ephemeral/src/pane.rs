#![forbid(unsafe_code)]

//! The ephemeral counter component.

use tally_core::geometry::Rect;
use tally_render::frame::Frame;
use tally_widgets::Widget;
use tally_widgets::block::Block;
use tally_widgets::button::ButtonRow;
use tally_widgets::counter::CounterDisplay;
use tracing::debug;

/// Labels for the pane's button row. One operation, one button.
const BUTTONS: &[&str] = &["+"];

/// A counter pane owning its value outright.
///
/// The count is private to the pane. It starts at 0, moves only through
/// [`increment`](Self::increment), and dies with the pane: the application
/// recreates the pane to model component teardown, and the fresh pane is
/// back at 0.
#[derive(Debug, Default)]
pub struct CounterPane {
    count: i64,
}

impl CounterPane {
    /// A fresh pane, counting from 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one. No input, no preconditions, no failure.
    pub fn increment(&mut self) {
        self.count += 1;
        debug!(count = self.count, "pane increment");
    }

    /// The current count.
    #[must_use]
    pub fn count(&self) -> i64 {
        self.count
    }

    /// The pane's button row, for rendering and for mouse hit tests.
    #[must_use]
    pub fn buttons(&self) -> ButtonRow<'static> {
        ButtonRow::new(BUTTONS)
    }

    /// Render the pane: its count in a titled box, buttons underneath.
    ///
    /// `buttons_area` is where the button row lands; the application passes
    /// the same rect to [`ButtonRow::hit`] when a click arrives.
    pub fn render(&self, area: Rect, buttons_area: Rect, frame: &mut Frame) {
        CounterDisplay::new(self.count)
            .label("local count")
            .block(Block::bordered().title("ephemeral"))
            .render(area, frame);
        self.buttons().render(buttons_area, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_counts_up() {
        let mut pane = CounterPane::new();
        assert_eq!(pane.count(), 0);
        for expected in 1..=5 {
            pane.increment();
            assert_eq!(pane.count(), expected);
        }
    }

    #[test]
    fn recreation_discards_the_count() {
        let mut pane = CounterPane::new();
        pane.increment();
        pane.increment();
        assert_eq!(pane.count(), 2);

        pane = CounterPane::new();
        assert_eq!(pane.count(), 0);
    }
}
