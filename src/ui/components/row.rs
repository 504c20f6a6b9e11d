//! A single table row and its details panel.
//!
//! The row is stateless: everything it shows comes from the [`RowView`]
//! built by the table for each render. Activating a cell yields a
//! [`RowIntent`] that the table turns into a state change.

use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};

use super::cell::{render_cell, CellEditor};
use super::checkbox::render_checkbox;
use crate::data::{Accessor, Column, Row, RowId};
use crate::ui::theme::Theme;

/// Indicator of a collapsed row that has details.
pub const COLLAPSED_INDICATOR: &str = "▸";

/// Indicator of an expanded row.
pub const EXPANDED_INDICATOR: &str = "▾";

/// Left margin of the details panel.
const DETAILS_INDENT: &str = "  ";

/// What activating a cell of a row asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIntent {
    /// Toggle the row's selection.
    ToggleSelection(RowId),
    /// Open the editor on a cell.
    Edit { row: RowId, accessor: Accessor },
    /// Expand or collapse the row.
    ToggleExpansion(RowId),
}

/// Resolve activation of a cell.
///
/// Checkbox and editable cells are input regions: activating them never
/// toggles the row's expansion.
pub fn activate(row: &Row, column: &Column) -> RowIntent {
    match &column.accessor {
        Accessor::Select => RowIntent::ToggleSelection(row.id()),
        accessor if column.editable => RowIntent::Edit {
            row: row.id(),
            accessor: accessor.clone(),
        },
        _ => RowIntent::ToggleExpansion(row.id()),
    }
}

/// Render inputs for one row.
pub struct RowView<'a> {
    row: &'a Row,
    columns: &'a [Column],
    selected: bool,
    expanded: bool,
    focused_column: Option<usize>,
    editor: Option<&'a CellEditor>,
}

impl<'a> RowView<'a> {
    /// Create a view of a row with nothing selected, expanded or focused.
    pub fn new(row: &'a Row, columns: &'a [Column]) -> Self {
        Self {
            row,
            columns,
            selected: false,
            expanded: false,
            focused_column: None,
            editor: None,
        }
    }

    /// Mark the row selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Mark the row expanded. Ignored when the row has no details.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded && self.row.has_details();
        self
    }

    /// Focus a column of this row.
    pub fn focused_column(mut self, column: Option<usize>) -> Self {
        self.focused_column = column;
        self
    }

    /// Attach an open cell editor.
    pub fn editor(mut self, editor: Option<&'a CellEditor>) -> Self {
        self.editor = editor.filter(|e| e.row() == self.row.id());
        self
    }

    /// The details panel wrapped to `width`, one string per line.
    ///
    /// Empty unless the row is expanded.
    pub fn details_lines(&self, width: u16) -> Vec<String> {
        let Some(details) = self.row.details().filter(|_| self.expanded) else {
            return Vec::new();
        };
        let text_width = usize::from(width).saturating_sub(DETAILS_INDENT.len());
        let mut lines: Vec<String> = wrap(&details.to_string(), text_width)
            .into_iter()
            .map(|line| format!("{DETAILS_INDENT}{line}"))
            .collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }

    /// Number of lines the row occupies at the given width.
    pub fn height(&self, width: u16) -> usize {
        1 + self.details_lines(width).len()
    }

    /// The indicator glyph, present only for rows with details.
    pub fn indicator(&self) -> Option<&'static str> {
        if !self.row.has_details() {
            None
        } else if self.expanded {
            Some(EXPANDED_INDICATOR)
        } else {
            Some(COLLAPSED_INDICATOR)
        }
    }

    /// Render the row's main line.
    ///
    /// `cells` holds one area per column on this line; `indicator` is the
    /// trailing indicator area.
    pub fn render(&self, frame: &mut Frame, line: Rect, cells: &[Rect], indicator: Rect, theme: &Theme) {
        frame.render_widget(
            Paragraph::new("").style(theme.row(self.selected, self.expanded)),
            line,
        );

        for (index, (column, area)) in self.columns.iter().zip(cells).enumerate() {
            let focused = self.focused_column == Some(index);
            match &column.accessor {
                Accessor::Select => render_checkbox(frame, *area, self.selected, focused, theme),
                Accessor::Field(field) => match self.editor {
                    Some(editor) if editor.targets(self.row.id(), &column.accessor) => {
                        editor.render(frame, *area, theme)
                    }
                    _ => render_cell(
                        frame,
                        *area,
                        self.row.get(field),
                        column.editable,
                        focused,
                        theme,
                    ),
                },
            }
        }

        if let Some(glyph) = self.indicator() {
            frame.render_widget(Paragraph::new(Span::styled(glyph, theme.muted())), indicator);
        }
    }

    /// Render one line of the details panel spanning the full width.
    pub fn render_details(&self, frame: &mut Frame, area: Rect, line: usize, theme: &Theme) {
        if let Some(text) = self.details_lines(area.width).get(line) {
            frame.render_widget(Paragraph::new(text.as_str()).style(theme.details()), area);
        }
    }
}

/// Break text into lines no wider than `width` columns.
///
/// Lines break at whitespace; a word wider than a whole line is split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        if line_width > 0 && line_width + 1 + Span::raw(word).width() > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        for c in word.chars() {
            let mut buf = [0; 4];
            let char_width = Span::raw(&*c.encode_utf8(&mut buf)).width();
            if line_width > 0 && line_width + char_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(c);
            line_width += char_width;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
