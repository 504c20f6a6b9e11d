//! Data cells and the inline cell editor.
//!
//! A read-only cell shows its value as provided. An editable cell shows the
//! value as an input; once activated it becomes a [`CellEditor`] that
//! publishes a new value on every keystroke that changes the draft.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, style::Style, text::Span, widgets::Paragraph, Frame};
use tracing::trace;

use super::input::{InputKind, TextInput};
use crate::data::{Accessor, RowId, Value};
use crate::ui::theme::Theme;

/// Render a data cell that is not being edited.
pub fn render_cell(
    frame: &mut Frame,
    area: Rect,
    value: Option<&Value>,
    editable: bool,
    focused: bool,
    theme: &Theme,
) {
    let text = value.map(ToString::to_string).unwrap_or_default();
    let mut style = Style::default();
    if editable {
        style = style.patch(theme.editable());
    }
    if focused {
        style = style.patch(theme.focused_cell());
    }
    frame.render_widget(Paragraph::new(Span::styled(text, style)), area);
}

/// The input kind for editing a value: numeric for numbers, text otherwise.
pub fn input_kind_for(value: Option<&Value>) -> InputKind {
    match value {
        Some(v) if v.is_number() => InputKind::Numeric,
        _ => InputKind::Text,
    }
}

/// Convert raw input back into a cell value.
///
/// Numeric input must parse to a finite number, otherwise `None` is
/// returned and nothing is published.
pub fn coerce(raw: &str, kind: InputKind) -> Option<Value> {
    match kind {
        InputKind::Text => Some(Value::Text(raw.to_string())),
        InputKind::Numeric => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Value::Number),
    }
}

/// An open edit session on one cell.
#[derive(Debug, Clone)]
pub struct CellEditor {
    /// Row being edited.
    row: RowId,
    /// Field being edited.
    accessor: Accessor,
    /// The draft text.
    input: TextInput,
    /// Whether the draft failed to coerce.
    invalid: bool,
}

impl CellEditor {
    /// Open an editor seeded with the cell's current value.
    pub fn open(row: RowId, accessor: Accessor, current: Option<&Value>) -> Self {
        let kind = input_kind_for(current);
        let seed = current.map(ToString::to_string).unwrap_or_default();
        Self {
            row,
            accessor,
            input: TextInput::with_value(seed, kind),
            invalid: false,
        }
    }

    /// The row being edited.
    pub fn row(&self) -> RowId {
        self.row
    }

    /// The field being edited.
    pub fn accessor(&self) -> &Accessor {
        &self.accessor
    }

    /// The current draft text.
    pub fn draft(&self) -> &str {
        self.input.value()
    }

    /// Whether the draft is a rejected numeric value.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Whether this editor targets the given cell.
    pub fn targets(&self, row: RowId, accessor: &Accessor) -> bool {
        self.row == row && &self.accessor == accessor
    }

    /// Feed a key to the editor.
    ///
    /// Returns the new cell value when the draft changed and coerces.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Value> {
        if !self.input.handle_input(key) {
            return None;
        }

        let value = coerce(self.input.value(), self.input.kind());
        self.invalid = value.is_none();
        if self.invalid {
            trace!(row = %self.row, draft = self.input.value(), "Draft is not a number");
        }
        value
    }

    /// Render the editor in place of the cell.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.input
            .render_inline(frame, area, theme.editing(self.invalid), true);
    }
}
