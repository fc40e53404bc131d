#![forbid(unsafe_code)]

//! RAII terminal lifecycle.
//!
//! [`TerminalSession`] owns the terminal's modal state for the lifetime of a
//! program run: raw mode, the alternate screen, mouse capture, and cursor
//! visibility. Whatever was enabled at construction is undone on drop, so an
//! early `?` return from the run loop still leaves the user's shell usable.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{cursor, event as ct_event, execute, terminal};

use crate::event::Event;

/// Which terminal modes a session should enable.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Switch to the alternate screen buffer.
    pub alternate_screen: bool,
    /// Capture mouse events.
    pub mouse_capture: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            mouse_capture: false,
        }
    }
}

/// Guard over the terminal's modal state.
///
/// Construction enables raw mode (plus the requested options) and hides the
/// cursor; [`restore`](Self::restore) or drop undoes everything in reverse
/// order. Restore is idempotent.
#[derive(Debug)]
pub struct TerminalSession {
    options: SessionOptions,
    restored: bool,
}

impl TerminalSession {
    /// Enable raw mode and the requested terminal modes.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if options.alternate_screen {
            execute!(out, terminal::EnterAlternateScreen)?;
        }
        if options.mouse_capture {
            execute!(out, ct_event::EnableMouseCapture)?;
        }
        execute!(out, cursor::Hide)?;
        Ok(Self {
            options,
            restored: false,
        })
    }

    /// Current terminal size as `(width, height)` in cells.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for input. Returns `true` when an event is ready.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<bool> {
        ct_event::poll(timeout)
    }

    /// Read one pending event, normalized to [`Event`].
    ///
    /// Returns `None` for backend events this stack does not model.
    pub fn read_event(&self) -> io::Result<Option<Event>> {
        let raw = ct_event::read()?;
        Ok(Event::from_crossterm(raw))
    }

    /// Undo all modal state. Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        let mut out = io::stdout();
        execute!(out, cursor::Show)?;
        if self.options.mouse_capture {
            execute!(out, ct_event::DisableMouseCapture)?;
        }
        if self.options.alternate_screen {
            execute!(out, terminal::LeaveAlternateScreen)?;
        }
        terminal::disable_raw_mode()?;
        out.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Errors during teardown are unreportable; the shell's `reset` is
        // the escape hatch of last resort.
        let _ = self.restore();
    }
}
