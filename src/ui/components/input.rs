//! Single-line text input used by the cell editor.
//!
//! Supports:
//! - Character input and deletion
//! - Cursor movement (left/right, home/end)
//! - A numeric kind that only accepts characters valid in a number
//!
//! ## Input Mode
//!
//! The `InputMode` enum indicates whether the table is in navigation mode
//! (where keys like j/k move the focus) or insert mode (where all character
//! keys are sent to the open cell editor).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// Input mode of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation mode - keys are table commands.
    #[default]
    Normal,
    /// Editing mode - keys go to the cell editor.
    Insert,
}

/// Which characters an input accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// Any character.
    #[default]
    Text,
    /// Digits, sign, decimal point and exponent marker.
    Numeric,
}

impl InputKind {
    /// Whether the kind accepts the character.
    pub fn accepts(self, c: char) -> bool {
        match self {
            InputKind::Text => !c.is_control(),
            InputKind::Numeric => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
        }
    }
}

/// A text input widget.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// The current input value.
    value: String,
    /// Cursor position within the value, in characters.
    cursor: usize,
    /// Accepted characters.
    kind: InputKind,
}

impl TextInput {
    /// Create a new input with an initial value, cursor at the end.
    pub fn with_value(value: impl Into<String>, kind: InputKind) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            kind,
        }
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the input kind.
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text before the cursor.
    pub fn cursor_offset(&self) -> usize {
        Span::raw(&self.value[..self.byte_index(self.cursor)]).width()
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of a character position.
    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the value was modified.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                if self.kind.accepts(c) {
                    let at = self.byte_index(self.cursor);
                    self.value.insert(at, c);
                    self.cursor += 1;
                    true
                } else {
                    false
                }
            }
            // Backspace - delete character before cursor
            (KeyCode::Backspace, _) => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                    true
                } else {
                    false
                }
            }
            // Delete - delete character at cursor
            (KeyCode::Delete, _) => {
                if self.cursor < self.len() {
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                    true
                } else {
                    false
                }
            }
            (KeyCode::Left, KeyModifiers::NONE) => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            (KeyCode::Right, KeyModifiers::NONE) => {
                if self.cursor < self.len() {
                    self.cursor += 1;
                }
                false
            }
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
                false
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor = self.len();
                false
            }
            // Ctrl+U - clear line
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if !self.value.is_empty() {
                    self.value.clear();
                    self.cursor = 0;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Render the input on a single line without a border.
    ///
    /// The terminal cursor is placed at the edit position when `focused` and
    /// the position is inside `area`.
    pub fn render_inline(&self, frame: &mut Frame, area: Rect, style: Style, focused: bool) {
        frame.render_widget(Paragraph::new(self.value.as_str()).style(style), area);

        if focused {
            let cursor_x = u16::try_from(self.cursor_offset())
                .ok()
                .and_then(|offset| area.x.checked_add(offset))
                .filter(|x| *x < area.right());
            if let Some(x) = cursor_x {
                frame.set_cursor_position(Position::new(x, area.y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_empty_input() {
        let input = TextInput::with_value("", InputKind::Numeric);
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
        assert_eq!(input.kind(), InputKind::Numeric);
    }

    #[test]
    fn test_with_value() {
        let input = TextInput::with_value("hello", InputKind::Text);
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_character_input() {
        let mut input = TextInput::with_value("", InputKind::Text);
        assert!(input.handle_input(key(KeyCode::Char('a'))));
        assert!(input.handle_input(key(KeyCode::Char('b'))));
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_numeric_rejects_letters() {
        let mut input = TextInput::with_value("2", InputKind::Numeric);
        assert!(!input.handle_input(key(KeyCode::Char('x'))));
        assert!(input.handle_input(key(KeyCode::Char('9'))));
        assert!(input.handle_input(key(KeyCode::Char('.'))));
        assert_eq!(input.value(), "29.");
    }

    #[test]
    fn test_backspace() {
        let mut input = TextInput::with_value("abc", InputKind::Text);
        assert!(input.handle_input(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace_at_start() {
        let mut input = TextInput::with_value("abc", InputKind::Text);
        input.cursor = 0;
        assert!(!input.handle_input(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_delete() {
        let mut input = TextInput::with_value("abc", InputKind::Text);
        input.cursor = 0;
        assert!(input.handle_input(key(KeyCode::Delete)));
        assert_eq!(input.value(), "bc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_delete_at_end() {
        let mut input = TextInput::with_value("abc", InputKind::Text);
        assert!(!input.handle_input(key(KeyCode::Delete)));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = TextInput::with_value("abc", InputKind::Text);
        input.handle_input(key(KeyCode::Left));
        assert_eq!(input.cursor(), 2);
        input.handle_input(key(KeyCode::Home));
        assert_eq!(input.cursor(), 0);
        input.handle_input(key(KeyCode::Left));
        assert_eq!(input.cursor(), 0);
        input.handle_input(key(KeyCode::Right));
        assert_eq!(input.cursor(), 1);
        input.handle_input(key(KeyCode::End));
        assert_eq!(input.cursor(), 3);
        input.handle_input(key(KeyCode::Right));
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_insert_in_middle_multibyte() {
        let mut input = TextInput::with_value("éc", InputKind::Text);
        input.cursor = 1;
        input.handle_input(key(KeyCode::Char('b')));
        assert_eq!(input.value(), "ébc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_cursor_offset_counts_display_width() {
        let mut input = TextInput::with_value("日本a", InputKind::Text);
        assert_eq!(input.cursor(), 3);
        assert_eq!(input.cursor_offset(), 5);

        input.handle_input(key(KeyCode::Left));
        assert_eq!(input.cursor_offset(), 4);
        input.handle_input(key(KeyCode::Home));
        assert_eq!(input.cursor_offset(), 0);
    }

    #[test]
    fn test_render_places_cursor_after_wide_chars() {
        use ratatui::{backend::TestBackend, Terminal};

        let input = TextInput::with_value("日本", InputKind::Text);
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|frame| {
                input.render_inline(frame, Rect::new(2, 1, 10, 1), Style::default(), true)
            })
            .unwrap();

        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(6, 1));
    }

    #[test]
    fn test_ctrl_u_clear() {
        let mut input = TextInput::with_value("hello", InputKind::Text);
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(input.handle_input(ctrl_u));
        assert!(input.is_empty());
        assert!(!input.handle_input(ctrl_u));
    }
}
