#![forbid(unsafe_code)]

//! Elm-style runtime for terminal applications.
//!
//! The program runtime manages the update/view loop, handling events and
//! rendering frames. It separates state (Model) from rendering (View) and
//! uses a command pattern for the few effects the demos need.
//!
//! # Example
//!
//! ```ignore
//! use tally_runtime::{Cmd, Model};
//! use tally_core::event::Event;
//! use tally_render::frame::Frame;
//!
//! struct Counter {
//!     count: i64,
//! }
//!
//! enum Msg {
//!     Increment,
//!     Quit,
//!     Noop,
//! }
//!
//! impl From<Event> for Msg {
//!     fn from(event: Event) -> Self {
//!         match event {
//!             Event::Key(k) if k.is_char('q') => Msg::Quit,
//!             Event::Key(k) if k.is_char('+') => Msg::Increment,
//!             _ => Msg::Noop,
//!         }
//!     }
//! }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
//!         match msg {
//!             Msg::Increment => { self.count += 1; Cmd::none() }
//!             Msg::Quit => Cmd::quit(),
//!             Msg::Noop => Cmd::none(),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         frame.buffer.set_string(0, 0, &format!("count: {}", self.count));
//!     }
//! }
//! ```

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{cursor, queue, style};
use tracing::{debug, debug_span, trace};

use tally_core::event::Event;
use tally_core::terminal_session::{SessionOptions, TerminalSession};
use tally_render::cell::Cell;
use tally_render::frame::Frame;

/// The Model trait defines application state and behavior.
///
/// Implementations define how the application responds to events
/// and renders its current state.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Messages represent actions that update the model state.
    /// Must be convertible from terminal events.
    type Message: From<Event>;

    /// Initialize the model with startup commands.
    ///
    /// Called once when the program starts.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    ///
    /// This is the core state transition function. Returns commands
    /// for any effects that should follow.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state to a frame.
    ///
    /// Called after updates when the UI needs to be redrawn.
    fn view(&self, frame: &mut Frame);
}

/// Commands represent effects to be executed by the runtime.
///
/// Commands are returned from `init()` and `update()` to trigger
/// actions like quitting or feeding a follow-up message to the model.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Quit the application.
    Quit,
    /// Send a message to the model.
    Msg(M),
    /// Execute multiple commands in order.
    Batch(Vec<Cmd<M>>),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
        }
    }
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a batch of commands. Collapses empty and singleton batches.
    pub fn batch(cmds: Vec<Self>) -> Self {
        if cmds.is_empty() {
            Self::None
        } else if cmds.len() == 1 {
            cmds.into_iter().next().unwrap()
        } else {
            Self::Batch(cmds)
        }
    }
}

/// Configuration for the program runtime.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Use the alternate screen buffer.
    pub alt_screen: bool,
    /// Enable mouse capture.
    pub mouse: bool,
    /// Input poll timeout.
    pub poll_timeout: Duration,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            alt_screen: true,
            mouse: false,
            poll_timeout: Duration::from_millis(100),
        }
    }
}

impl ProgramConfig {
    /// Enable mouse support.
    #[must_use]
    pub fn with_mouse(mut self) -> Self {
        self.mouse = true;
        self
    }
}

/// The program runtime that manages the update/view loop.
pub struct Program<M: Model> {
    /// The application model.
    model: M,
    /// Terminal lifecycle guard (raw mode, alt screen, mouse).
    session: TerminalSession,
    /// Render target reused across view passes.
    frame: Frame,
    /// Whether the program is running.
    running: bool,
    /// Whether the UI needs to be redrawn.
    dirty: bool,
    /// Poll timeout for input.
    poll_timeout: Duration,
    /// Whether the cursor is currently shown by the presenter.
    cursor_shown: bool,
}

impl<M: Model> Program<M> {
    /// Create a new program with default configuration.
    pub fn new(model: M) -> io::Result<Self> {
        Self::with_config(model, ProgramConfig::default())
    }

    /// Create a new program with the specified configuration.
    pub fn with_config(model: M, config: ProgramConfig) -> io::Result<Self> {
        let session = TerminalSession::new(SessionOptions {
            alternate_screen: config.alt_screen,
            mouse_capture: config.mouse,
        })?;

        let (width, height) = session.size().unwrap_or((80, 24));
        let frame = Frame::new(width.max(1), height.max(1));

        Ok(Self {
            model,
            session,
            frame,
            running: true,
            dirty: true,
            poll_timeout: config.poll_timeout,
            cursor_shown: false,
        })
    }

    /// Run the main event loop.
    ///
    /// Handles initialization, event polling and message dispatch, frame
    /// rendering, and terminal cleanup. The terminal is restored even when
    /// an I/O error propagates out early, via the session guard.
    pub fn run(&mut self) -> io::Result<()> {
        let cmd = self.model.init();
        self.execute_cmd(cmd);

        self.render_frame()?;

        while self.running {
            if self.session.poll_event(self.poll_timeout)? {
                // Drain all pending events before rendering once.
                loop {
                    if let Some(event) = self.session.read_event()? {
                        self.handle_event(event);
                    }
                    if !self.session.poll_event(Duration::from_millis(0))? {
                        break;
                    }
                }
            }

            if self.dirty && self.running {
                self.render_frame()?;
            }
        }

        self.session.restore()
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Resize { width, height } = event {
            debug!(width, height, "resize");
            self.frame.buffer.resize(width.max(1), height.max(1));
            self.dirty = true;
            return;
        }

        self.dispatch(M::Message::from(event));
    }

    fn dispatch(&mut self, msg: M::Message) {
        trace!("dispatch message");
        let cmd = self.model.update(msg);
        self.dirty = true;
        self.execute_cmd(cmd);
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => {
                debug!("quit requested");
                self.running = false;
            }
            Cmd::Msg(msg) => self.dispatch(msg),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_cmd(cmd);
                }
            }
        }
    }

    fn render_frame(&mut self) -> io::Result<()> {
        let _span = debug_span!(
            "render",
            w = self.frame.buffer.width(),
            h = self.frame.buffer.height()
        )
        .entered();

        self.frame.reset();
        self.model.view(&mut self.frame);
        self.dirty = false;
        self.present()
    }

    /// Write the frame to the terminal, full-screen.
    ///
    /// Every cell of every row is covered (blanks are spaces), so no clear
    /// pass is needed and nothing from the previous frame survives.
    fn present(&mut self) -> io::Result<()> {
        let mut out = io::stdout();
        let width = self.frame.buffer.width() as usize;
        let mut row = String::with_capacity(width);

        for y in 0..self.frame.buffer.height() {
            row.clear();
            for x in 0..self.frame.buffer.width() {
                // Continuation cells are covered by their wide glyph.
                if let Some(ch) = self.frame.buffer.get(x, y).and_then(Cell::ch) {
                    row.push(ch);
                }
            }
            queue!(out, cursor::MoveTo(0, y), style::Print(&row))?;
        }

        match self.frame.cursor() {
            Some((x, y)) => {
                queue!(out, cursor::MoveTo(x, y), cursor::Show)?;
                self.cursor_shown = true;
            }
            None if self.cursor_shown => {
                queue!(out, cursor::Hide)?;
                self.cursor_shown = false;
            }
            None => {}
        }

        out.flush()
    }
}
