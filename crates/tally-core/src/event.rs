#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! Events arrive from the terminal backend and are normalized into the types
//! here before the runtime hands them to application models. Applications
//! convert them into their own message type via `From<Event>`.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier state attached to key and mouse events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const CTRL  = 0b0000_0010;
        const ALT   = 0b0000_0100;
    }
}

/// A key identifier.
///
/// Only the keys the demos bind are represented; unrecognized backend keys
/// normalize to [`KeyCode::Other`] and are ignored by applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character key.
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    /// Any key this crate does not model.
    Other,
}

/// Press/repeat/release phase of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Press,
    Repeat,
    Release,
}

/// A normalized keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a plain key press with no modifiers.
    #[must_use]
    pub const fn press(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// Whether this is a press (or repeat) of the plain character `c`,
    /// with neither CTRL nor ALT held.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        self.kind != KeyEventKind::Release
            && self.code == KeyCode::Char(c)
            && !self.modifiers.intersects(Modifiers::CTRL | Modifiers::ALT)
    }
}

/// Mouse buttons reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What a mouse event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Moved,
    ScrollUp,
    ScrollDown,
}

/// A normalized mouse event, positioned in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub column: u16,
    pub row: u16,
    pub modifiers: Modifiers,
}

/// Canonical input events consumed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
    FocusGained,
    FocusLost,
}

#[cfg(all(feature = "crossterm", not(target_arch = "wasm32")))]
mod convert {
    use super::*;
    use crossterm::event as ct;

    impl From<ct::KeyModifiers> for Modifiers {
        fn from(m: ct::KeyModifiers) -> Self {
            let mut out = Modifiers::empty();
            if m.contains(ct::KeyModifiers::SHIFT) {
                out |= Modifiers::SHIFT;
            }
            if m.contains(ct::KeyModifiers::CONTROL) {
                out |= Modifiers::CTRL;
            }
            if m.contains(ct::KeyModifiers::ALT) {
                out |= Modifiers::ALT;
            }
            out
        }
    }

    impl From<ct::KeyCode> for KeyCode {
        fn from(code: ct::KeyCode) -> Self {
            match code {
                ct::KeyCode::Char(c) => KeyCode::Char(c),
                ct::KeyCode::Enter => KeyCode::Enter,
                ct::KeyCode::Esc => KeyCode::Esc,
                ct::KeyCode::Backspace => KeyCode::Backspace,
                ct::KeyCode::Tab => KeyCode::Tab,
                ct::KeyCode::BackTab => KeyCode::BackTab,
                ct::KeyCode::Up => KeyCode::Up,
                ct::KeyCode::Down => KeyCode::Down,
                ct::KeyCode::Left => KeyCode::Left,
                ct::KeyCode::Right => KeyCode::Right,
                _ => KeyCode::Other,
            }
        }
    }

    impl From<ct::KeyEventKind> for KeyEventKind {
        fn from(kind: ct::KeyEventKind) -> Self {
            match kind {
                ct::KeyEventKind::Press => KeyEventKind::Press,
                ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
                ct::KeyEventKind::Release => KeyEventKind::Release,
            }
        }
    }

    impl From<ct::MouseButton> for MouseButton {
        fn from(b: ct::MouseButton) -> Self {
            match b {
                ct::MouseButton::Left => MouseButton::Left,
                ct::MouseButton::Right => MouseButton::Right,
                ct::MouseButton::Middle => MouseButton::Middle,
            }
        }
    }

    impl Event {
        /// Normalize a backend event.
        ///
        /// Returns `None` for backend events this crate does not model
        /// (paste, drag, scroll-left/right).
        #[must_use]
        pub fn from_crossterm(event: ct::Event) -> Option<Self> {
            match event {
                ct::Event::Key(k) => Some(Event::Key(KeyEvent {
                    code: k.code.into(),
                    modifiers: k.modifiers.into(),
                    kind: k.kind.into(),
                })),
                ct::Event::Mouse(m) => {
                    let kind = match m.kind {
                        ct::MouseEventKind::Down(b) => MouseEventKind::Down(b.into()),
                        ct::MouseEventKind::Up(b) => MouseEventKind::Up(b.into()),
                        ct::MouseEventKind::Moved => MouseEventKind::Moved,
                        ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
                        ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
                        _ => return None,
                    };
                    Some(Event::Mouse(MouseEvent {
                        kind,
                        column: m.column,
                        row: m.row,
                        modifiers: m.modifiers.into(),
                    }))
                }
                ct::Event::Resize(width, height) => Some(Event::Resize { width, height }),
                ct::Event::FocusGained => Some(Event::FocusGained),
                ct::Event::FocusLost => Some(Event::FocusLost),
                _ => None,
            }
        }
    }
}
