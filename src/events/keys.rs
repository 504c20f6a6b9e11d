//! Key binding definitions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A table command triggered by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Focus the previous row.
    Up,
    /// Focus the next row.
    Down,
    /// Focus the previous column.
    Left,
    /// Focus the next column.
    Right,
    /// Activate the focused cell (the keyboard "click").
    Activate,
    /// Toggle selection of the focused row.
    ToggleSelect,
    /// Toggle expansion of the focused row.
    ToggleExpand,
    /// Delete all selected rows.
    DeleteSelected,
    /// Exit the application.
    Quit,
}

/// Key binding configuration.
pub struct KeyBindings {
    /// Whether vim-style bindings are enabled.
    pub vim_mode: bool,
}

impl KeyBindings {
    /// Create new key bindings.
    pub fn new(vim_mode: bool) -> Self {
        Self { vim_mode }
    }

    /// Map a key press to a command.
    pub fn resolve(&self, key: KeyEvent) -> Option<Command> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Command::Quit),
            (KeyCode::Up, _) => Some(Command::Up),
            (KeyCode::Down, _) => Some(Command::Down),
            (KeyCode::Left, _) => Some(Command::Left),
            (KeyCode::Right, _) => Some(Command::Right),
            (KeyCode::Enter, _) => Some(Command::Activate),
            (KeyCode::Delete, _) => Some(Command::DeleteSelected),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => match c {
                ' ' => Some(Command::ToggleSelect),
                'o' => Some(Command::ToggleExpand),
                'd' => Some(Command::DeleteSelected),
                'q' => Some(Command::Quit),
                'k' if self.vim_mode => Some(Command::Up),
                'j' if self.vim_mode => Some(Command::Down),
                'h' if self.vim_mode => Some(Command::Left),
                'l' if self.vim_mode => Some(Command::Right),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(true)
    }
}
