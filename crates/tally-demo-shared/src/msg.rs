#![forbid(unsafe_code)]

use tally_core::event::{Event, KeyEvent, MouseEvent};

#[derive(Debug, Clone, Copy)]
pub enum Msg {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Noop,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Msg::Key(key),
            Event::Mouse(mouse) => Msg::Mouse(mouse),
            _ => Msg::Noop,
        }
    }
}
