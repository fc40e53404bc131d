#![forbid(unsafe_code)]

use std::cell::RefCell;

use tally_core::event::{KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseEvent, MouseEventKind};
use tally_core::geometry::Rect;
use tally_render::frame::Frame;
use tally_runtime::{Cmd, Model};
use tracing::debug;

use crate::msg::Msg;
use crate::pane::CounterPane;

const HELP_LINE: &str = "+/space increment · r recreate pane · q quit";

pub struct EphemeralApp {
    pane: CounterPane,
    /// Saved rect for the pane's button row (for mouse hit detection).
    buttons_area: RefCell<Rect>,
}

impl EphemeralApp {
    pub fn new() -> Self {
        Self {
            pane: CounterPane::new(),
            buttons_area: RefCell::new(Rect::default()),
        }
    }

    /// The pane the app currently shows. Tests inspect it; the pane itself
    /// stays otherwise private to the app.
    #[cfg(test)]
    pub fn pane(&self) -> &CounterPane {
        &self.pane
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
            KeyCode::Char('+') | KeyCode::Char(' ') => {
                self.pane.increment();
                Cmd::none()
            }
            KeyCode::Char('r') => {
                // Teardown and remount: the old pane's count goes with it.
                debug!(discarded = self.pane.count(), "recreating pane");
                self.pane = CounterPane::new();
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
        if self.pane.buttons().hit(area, mouse.column, mouse.row) == Some(0) {
            self.pane.increment();
        }
        Cmd::none()
    }
}

impl Model for EphemeralApp {
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
        if area.height < 3 {
            return;
        }

        let pane_area = Rect::new(0, 0, area.width, area.height - 2);
        let buttons_area = Rect::new(0, area.height - 2, area.width, 1);
        *self.buttons_area.borrow_mut() = buttons_area;

        self.pane.render(pane_area, buttons_area, frame);
        frame
            .buffer
            .set_string(0, area.height - 1, HELP_LINE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::event::{Event, MouseButton};

    fn press(c: char) -> Msg {
        Msg::Key(KeyEvent::press(KeyCode::Char(c)))
    }

    #[test]
    fn n_increments_display_n() {
        let mut app = EphemeralApp::new();
        for _ in 0..4 {
            let _ = app.update(press('+'));
        }
        assert_eq!(app.pane().count(), 4);

        let mut frame = Frame::new(30, 8);
        app.view(&mut frame);
        assert!(frame.buffer.screen_text().iter().any(|row| row.contains('4')));
    }

    #[test]
    fn recreate_resets_to_zero() {
        let mut app = EphemeralApp::new();
        let _ = app.update(press('+'));
        let _ = app.update(press(' '));
        assert_eq!(app.pane().count(), 2);

        let _ = app.update(press('r'));
        assert_eq!(app.pane().count(), 0);
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut app = EphemeralApp::new();
        assert!(matches!(app.update(press('q')), Cmd::Quit));

        let ctrl_c = Msg::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: Modifiers::CTRL,
            kind: KeyEventKind::Press,
        });
        assert!(matches!(app.update(ctrl_c), Cmd::Quit));
    }

    #[test]
    fn click_on_plus_button_increments() {
        let mut app = EphemeralApp::new();

        // A view pass records where the buttons landed.
        let mut frame = Frame::new(30, 8);
        app.view(&mut frame);

        let area = *app.buttons_area.borrow();
        let rects = app.pane().buttons().layout(area);
        let target = rects[0];

        let click = Msg::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: target.x,
            row: target.y,
            modifiers: Modifiers::empty(),
        });
        let _ = app.update(click);
        assert_eq!(app.pane().count(), 1);

        // A click elsewhere does nothing.
        let miss = Msg::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: Modifiers::empty(),
        });
        let _ = app.update(miss);
        assert_eq!(app.pane().count(), 1);
    }

    #[test]
    fn resize_events_map_to_noop() {
        let msg = Msg::from(Event::Resize {
            width: 10,
            height: 10,
        });
        assert!(matches!(msg, Msg::Noop));
    }
}
