//! Event handling for the application.
//!
//! This module polls terminal input and maps keys to table commands.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::{EventHandler, DEFAULT_TICK_RATE_MS};
pub use keys::{Command, KeyBindings};

/// An application event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input arrived within the tick rate.
    Tick,
    /// The application should exit.
    Quit,
}
