#![forbid(unsafe_code)]

use std::cell::RefCell;

use tally_core::event::{KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseEvent, MouseEventKind};
use tally_core::geometry::Rect;
use tally_render::frame::Frame;
use tally_runtime::{Cmd, Model};
use tally_widgets::Widget;
use tally_widgets::block::Block;
use tally_widgets::button::ButtonRow;
use tally_widgets::counter::CounterDisplay;
use tracing::debug;

use crate::model::{SharedCounter, SubscriberPane};
use crate::msg::Msg;

const BUTTONS: &[&str] = &["-", "+"];
const HELP_LINE: &str = "+/- mutate · 2 mount/unmount pane B · q quit";

pub struct SharedApp {
    counter: SharedCounter,
    pane_a: SubscriberPane,
    /// Pane B is unmounted by toggling it away; `None` models teardown.
    pane_b: Option<SubscriberPane>,
    /// Saved rect for the button row (for mouse hit detection).
    buttons_area: RefCell<Rect>,
}

impl SharedApp {
    pub fn new() -> Self {
        // The one long-lived model instance for the process.
        let counter = SharedCounter::new();
        let pane_a = SubscriberPane::mount("pane A", &counter);
        let pane_b = Some(SubscriberPane::mount("pane B", &counter));
        Self {
            counter,
            pane_a,
            pane_b,
            buttons_area: RefCell::new(Rect::default()),
        }
    }

    fn buttons(&self) -> ButtonRow<'static> {
        ButtonRow::new(BUTTONS)
    }

    fn toggle_pane_b(&mut self) {
        match self.pane_b.take() {
            Some(pane) => {
                debug!(last_seen = pane.seen(), "unmounting pane B");
                drop(pane);
            }
            None => self.pane_b = Some(SubscriberPane::mount("pane B", &self.counter)),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        if key.kind != KeyEventKind::Press {
            return Cmd::none();
        }

        match key.code {
            KeyCode::Char('q') if !key.modifiers.contains(Modifiers::CTRL) => Cmd::quit(),
            KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(Modifiers::CTRL) => {
                Cmd::quit()
            }
            KeyCode::Char('+') => {
                self.counter.increment();
                Cmd::none()
            }
            KeyCode::Char('-') => {
                self.counter.decrement();
                Cmd::none()
            }
            KeyCode::Char('2') => {
                self.toggle_pane_b();
                Cmd::none()
            }
            _ => Cmd::none(),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Cmd<Msg> {
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return Cmd::none();
        }

        let area = *self.buttons_area.borrow();
        match self.buttons().hit(area, mouse.column, mouse.row) {
            Some(0) => self.counter.decrement(),
            Some(1) => self.counter.increment(),
            _ => {}
        }
        Cmd::none()
    }
}

impl Model for SharedApp {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Key(key) => self.handle_key(key),
            Msg::Mouse(mouse) => self.handle_mouse(mouse),
            Msg::Noop => Cmd::none(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        if area.height < 4 || area.width < 4 {
            return;
        }

        let panes_area = Rect::new(0, 0, area.width, area.height - 2);
        let buttons_area = Rect::new(0, area.height - 2, area.width, 1);
        *self.buttons_area.borrow_mut() = buttons_area;

        // Model value on the left, subscriber panes on the right half.
        let half = panes_area.width / 2;
        let model_area = Rect::new(0, 0, half, panes_area.height);
        let pane_height = panes_area.height / 2;

        CounterDisplay::new(self.counter.value())
            .label("model value")
            .block(Block::bordered().title("shared model"))
            .render(model_area, frame);

        let pane_a_area = Rect::new(half, 0, panes_area.width - half, pane_height);
        CounterDisplay::new(self.pane_a.seen())
            .label(self.pane_a.name())
            .block(Block::bordered().title("subscriber"))
            .render(pane_a_area, frame);

        let pane_b_area = Rect::new(
            half,
            pane_height,
            panes_area.width - half,
            panes_area.height - pane_height,
        );
        match &self.pane_b {
            Some(pane) => {
                CounterDisplay::new(pane.seen())
                    .label(pane.name())
                    .block(Block::bordered().title("subscriber"))
                    .render(pane_b_area, frame);
            }
            None => {
                let block = Block::bordered().title("unmounted");
                block.render(pane_b_area, frame);
                let inner = block.inner(pane_b_area);
                if !inner.is_empty() {
                    frame.buffer.set_string(inner.x, inner.y, "pane B is torn down");
                }
            }
        }

        self.buttons().render(buttons_area, frame);
        frame.buffer.set_string(0, area.height - 1, HELP_LINE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::event::MouseButton;

    fn press(c: char) -> Msg {
        Msg::Key(KeyEvent::press(KeyCode::Char(c)))
    }

    #[test]
    fn mutations_reach_every_mounted_pane() {
        let mut app = SharedApp::new();
        for _ in 0..3 {
            let _ = app.update(press('+'));
        }

        assert_eq!(app.counter.value(), 3);
        assert_eq!(app.pane_a.seen(), 3);
        assert_eq!(app.pane_b.as_ref().unwrap().seen(), 3);

        let _ = app.update(press('-'));
        assert_eq!(app.counter.value(), 2);
        assert_eq!(app.pane_a.seen(), 2);
        assert_eq!(app.pane_b.as_ref().unwrap().seen(), 2);
    }

    #[test]
    fn unmounted_pane_b_misses_updates_until_remounted() {
        let mut app = SharedApp::new();
        let _ = app.update(press('+'));
        assert_eq!(app.counter.subscriber_count(), 2);

        let _ = app.update(press('2'));
        assert!(app.pane_b.is_none());
        assert_eq!(app.counter.subscriber_count(), 1);

        let _ = app.update(press('+'));
        assert_eq!(app.pane_a.seen(), 2);

        // Remount: the fresh pane reads the current value on mount.
        let _ = app.update(press('2'));
        assert_eq!(app.pane_b.as_ref().unwrap().seen(), 2);
        assert_eq!(app.counter.subscriber_count(), 2);
    }

    #[test]
    fn negative_values_render() {
        let mut app = SharedApp::new();
        let _ = app.update(press('-'));
        assert_eq!(app.counter.value(), -1);

        let mut frame = Frame::new(40, 10);
        app.view(&mut frame);
        let screen = frame.buffer.screen_text().join("\n");
        assert!(screen.contains("-1"));
    }

    #[test]
    fn every_pane_shows_the_model_value_after_view() {
        let mut app = SharedApp::new();
        for _ in 0..5 {
            let _ = app.update(press('+'));
        }

        let mut frame = Frame::new(44, 10);
        app.view(&mut frame);
        let screen = frame.buffer.screen_text().join("\n");
        // Model pane plus both subscriber panes all display 5.
        assert_eq!(screen.matches('5').count(), 3);
    }

    #[test]
    fn buttons_mutate_via_mouse() {
        let mut app = SharedApp::new();

        let mut frame = Frame::new(40, 10);
        app.view(&mut frame);

        let area = *app.buttons_area.borrow();
        let rects = app.buttons().layout(area);

        let click = |rect: Rect| {
            Msg::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: rect.x + 1,
                row: rect.y,
                modifiers: Modifiers::empty(),
            })
        };

        let _ = app.update(click(rects[1]));
        assert_eq!(app.counter.value(), 1);
        let _ = app.update(click(rects[0]));
        assert_eq!(app.counter.value(), 0);
    }

    #[test]
    fn q_quits() {
        let mut app = SharedApp::new();
        assert!(matches!(app.update(press('q')), Cmd::Quit));
    }
}
