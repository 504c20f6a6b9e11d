//! Interactive data table.
//!
//! The table never owns the collection. The host passes the current rows and
//! columns to every call; changes to the collection are returned upward as
//! [`DataTableAction::Update`] carrying a fresh collection, which the host
//! stores and hands back on the next render.
//!
//! The table itself owns only transient view state:
//! - which row is expanded and which rows are selected ([`TableState`])
//! - the focused cell
//! - the open cell editor, if any

use std::iter;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, info, warn};

use super::cell::CellEditor;
use super::header::render_header;
use super::input::InputMode;
use super::row::{activate, RowIntent, RowView};
use crate::data::{Accessor, Column, Row, RowId, Rows, Value};
use crate::events::{Command, KeyBindings};
use crate::table::{ops, Result, TableMsg, TableState};
use crate::ui::theme::Theme;

/// Widest a column grows to fit its content.
const MAX_COLUMN_WIDTH: usize = 32;

/// Width of the checkbox text.
const CHECKBOX_WIDTH: usize = 3;

/// Label of the bulk delete control.
const DELETE_LABEL: &str = "Delete Selected";

/// Actions reported by the table to its host.
#[derive(Debug, Clone, PartialEq)]
pub enum DataTableAction {
    /// The collection changed; the host should replace its rows.
    Update(Rows),
    /// The user asked to quit.
    Quit,
}

/// A line of the table body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyLine {
    /// The main line of the row at this position.
    Row(usize),
    /// One line of the details panel of the row at this position.
    Details { position: usize, line: usize },
}

/// Interactive table with expansion, selection, bulk delete and cell editing.
pub struct DataTable {
    /// Expansion and selection.
    state: TableState,
    /// Focused row position.
    cursor_row: usize,
    /// Focused column position.
    cursor_col: usize,
    /// Open cell editor.
    editor: Option<CellEditor>,
    /// Key bindings for navigation mode.
    bindings: KeyBindings,
    /// Colors and styles.
    theme: Theme,
}

impl DataTable {
    /// Create a new table with default key bindings.
    pub fn new() -> Self {
        Self::with_bindings(KeyBindings::default())
    }

    /// Create a new table with the given key bindings.
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            state: TableState::new(),
            cursor_row: 0,
            cursor_col: 0,
            editor: None,
            bindings,
            theme: Theme::default(),
        }
    }

    /// Get the expansion/selection state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Get the focused cell as `(row position, column position)`.
    pub fn focus(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Get the open cell editor.
    pub fn editor(&self) -> Option<&CellEditor> {
        self.editor.as_ref()
    }

    /// Whether keys currently go to a cell editor.
    pub fn input_mode(&self) -> InputMode {
        if self.editor.is_some() {
            InputMode::Insert
        } else {
            InputMode::Normal
        }
    }

    fn update_state(&mut self, msg: TableMsg) {
        self.state = std::mem::take(&mut self.state).apply(msg);
    }

    /// Expand the row, or collapse it if it is already expanded.
    pub fn toggle_expansion(&mut self, id: RowId) {
        self.update_state(TableMsg::ToggleExpansion(id));
        debug!(row = %id, expanded = ?self.state.expanded(), "Toggled expansion");
    }

    /// Select the row, or deselect it if it is already selected.
    pub fn toggle_selection(&mut self, id: RowId) {
        self.update_state(TableMsg::ToggleSelection(id));
        debug!(row = %id, selected = self.state.selected_count(), "Toggled selection");
    }

    /// Remove all selected rows.
    ///
    /// Returns the new collection and clears the selection, or `None` when
    /// nothing is selected.
    pub fn bulk_delete(&mut self, rows: &[Rc<Row>]) -> Option<Rows> {
        if !self.state.can_bulk_delete() {
            return None;
        }

        let remaining = ops::bulk_delete(rows, self.state.selected());
        info!(
            deleted = rows.len() - remaining.len(),
            remaining = remaining.len(),
            "Bulk deleted rows"
        );
        self.update_state(TableMsg::ClearSelection);
        Some(remaining)
    }

    /// Replace one field of one row, returning the new collection.
    pub fn edit_cell(
        &self,
        rows: &[Rc<Row>],
        id: RowId,
        accessor: &Accessor,
        value: Value,
    ) -> Result<Rows> {
        let edited = ops::edit_cell(rows, id, accessor, value)?;
        debug!(row = %id, field = accessor.as_str(), "Edited cell");
        Ok(edited)
    }

    /// Align the view state with a collection the host just replaced.
    ///
    /// Forgets selected or expanded rows that no longer exist, closes an
    /// editor whose row is gone and keeps the focus inside the table.
    pub fn sync(&mut self, rows: &[Rc<Row>]) {
        self.state = std::mem::take(&mut self.state).reconcile(rows.iter().map(|r| r.id()));

        let editor_row_gone = self
            .editor
            .as_ref()
            .is_some_and(|e| ops::position_of(rows, e.row()).is_err());
        if editor_row_gone {
            debug!("Closing editor of removed row");
            self.editor = None;
        }

        self.cursor_row = self.cursor_row.min(rows.len().saturating_sub(1));
    }

    /// Handle keyboard input.
    ///
    /// Returns an action for the host when the collection changed or the
    /// user asked to quit.
    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        rows: &[Rc<Row>],
        columns: &[Column],
    ) -> Option<DataTableAction> {
        if self.editor.is_some() {
            return self.handle_editor_input(key, rows);
        }

        match self.bindings.resolve(key)? {
            Command::Up => {
                self.cursor_row = self.cursor_row.saturating_sub(1);
                None
            }
            Command::Down => {
                if self.cursor_row + 1 < rows.len() {
                    self.cursor_row += 1;
                }
                None
            }
            Command::Left => {
                self.cursor_col = self.cursor_col.saturating_sub(1);
                None
            }
            Command::Right => {
                if self.cursor_col + 1 < columns.len() {
                    self.cursor_col += 1;
                }
                None
            }
            Command::Activate => {
                let row = rows.get(self.cursor_row)?;
                let column = columns.get(self.cursor_col)?;
                self.perform(activate(row, column), row);
                None
            }
            Command::ToggleSelect => {
                let id = rows.get(self.cursor_row)?.id();
                self.toggle_selection(id);
                None
            }
            Command::ToggleExpand => {
                let id = rows.get(self.cursor_row)?.id();
                self.toggle_expansion(id);
                None
            }
            Command::DeleteSelected => self.bulk_delete(rows).map(|remaining| {
                self.cursor_row = self.cursor_row.min(remaining.len().saturating_sub(1));
                DataTableAction::Update(remaining)
            }),
            Command::Quit => Some(DataTableAction::Quit),
        }
    }

    fn perform(&mut self, intent: RowIntent, row: &Row) {
        match intent {
            RowIntent::ToggleSelection(id) => self.toggle_selection(id),
            RowIntent::ToggleExpansion(id) => self.toggle_expansion(id),
            RowIntent::Edit { row: id, accessor } => {
                let current = accessor.field().and_then(|f| row.get(f));
                debug!(row = %id, field = accessor.as_str(), "Opening cell editor");
                self.editor = Some(CellEditor::open(id, accessor, current));
            }
        }
    }

    fn handle_editor_input(
        &mut self,
        key: KeyEvent,
        rows: &[Rc<Row>],
    ) -> Option<DataTableAction> {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            debug!("Closing cell editor");
            self.editor = None;
            return None;
        }

        let editor = self.editor.as_mut()?;
        let value = editor.handle_input(key)?;
        let (id, accessor) = (editor.row(), editor.accessor().clone());

        match self.edit_cell(rows, id, &accessor, value) {
            Ok(edited) => Some(DataTableAction::Update(edited)),
            Err(e) => {
                warn!(error = %e, "Dropping edit");
                self.editor = None;
                None
            }
        }
    }

    /// Render the table.
    ///
    /// Output depends only on the arguments and the table's state.
    pub fn render(&self, frame: &mut Frame, area: Rect, rows: &[Rc<Row>], columns: &[Column]) {
        let show_delete = self.state.can_bulk_delete();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(if show_delete { 1 } else { 0 }),
            ])
            .split(area);

        self.render_table(frame, chunks[0], rows, columns);
        if show_delete {
            self.render_delete_control(frame, chunks[1]);
        }
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, rows: &[Rc<Row>], columns: &[Column]) {
        let title = if self.state.can_bulk_delete() {
            format!(
                " Rows ({}) · {} selected ",
                rows.len(),
                self.state.selected_count()
            )
        } else {
            format!(" Rows ({}) ", rows.len())
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.muted());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints(rows, columns))
            .spacing(1u16)
            .flex(Flex::Start)
            .split(Rect { height: 1, ..inner });
        let (column_cells, indicator) = cells.split_at(columns.len());
        let indicator = indicator.first().copied().unwrap_or_default();

        render_header(frame, column_cells, columns, &self.theme);

        let body_height = inner.height.saturating_sub(1) as usize;
        if rows.is_empty() {
            if body_height > 0 {
                frame.render_widget(
                    Paragraph::new(Span::styled("No rows", self.theme.muted())),
                    Rect {
                        y: inner.y + 1,
                        height: 1,
                        ..inner
                    },
                );
            }
            return;
        }

        let lines = self.body_lines(rows, columns, inner.width);
        let offset = self.scroll_offset(&lines, body_height);

        for (i, line) in lines.iter().skip(offset).take(body_height).enumerate() {
            let y = inner.y + 1 + i as u16;
            let line_area = Rect {
                y,
                height: 1,
                ..inner
            };
            match *line {
                BodyLine::Row(position) => {
                    let row_cells: Vec<Rect> =
                        column_cells.iter().map(|c| Rect { y, ..*c }).collect();
                    self.row_view(&rows[position], position, columns).render(
                        frame,
                        line_area,
                        &row_cells,
                        Rect { y, ..indicator },
                        &self.theme,
                    );
                }
                BodyLine::Details { position, line } => self
                    .row_view(&rows[position], position, columns)
                    .render_details(frame, line_area, line, &self.theme),
            }
        }
    }

    fn row_view<'a>(&'a self, row: &'a Row, position: usize, columns: &'a [Column]) -> RowView<'a> {
        let focused = position == self.cursor_row;
        RowView::new(row, columns)
            .selected(self.state.is_selected(row.id()))
            .expanded(self.state.shows_details(row))
            .focused_column(focused.then_some(self.cursor_col))
            .editor(self.editor.as_ref())
    }

    fn body_lines(&self, rows: &[Rc<Row>], columns: &[Column], width: u16) -> Vec<BodyLine> {
        rows.iter()
            .enumerate()
            .flat_map(|(position, row)| {
                let details = self.row_view(row, position, columns).height(width) - 1;
                iter::once(BodyLine::Row(position))
                    .chain((0..details).map(move |line| BodyLine::Details { position, line }))
            })
            .collect()
    }

    /// First visible body line, so that the focused row and its details fit.
    fn scroll_offset(&self, lines: &[BodyLine], height: usize) -> usize {
        let Some(start) = lines
            .iter()
            .position(|l| *l == BodyLine::Row(self.cursor_row))
        else {
            return 0;
        };
        let details = lines[start + 1..]
            .iter()
            .take_while(|l| matches!(l, BodyLine::Details { .. }))
            .count();
        let end = start + details;
        (end + 1).saturating_sub(height).min(start)
    }

    fn render_delete_control(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ({}) ", DELETE_LABEL, self.state.selected_count()),
                self.theme.delete_control(),
            ),
            Span::styled("  press d to delete", self.theme.muted()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Default for DataTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Width of each column: the widest of its header and values, plus the
/// trailing indicator column.
fn column_constraints(rows: &[Rc<Row>], columns: &[Column]) -> Vec<Constraint> {
    columns
        .iter()
        .map(|column| {
            let content = match column.accessor.field() {
                None => CHECKBOX_WIDTH,
                Some(field) => rows
                    .iter()
                    .filter_map(|r| r.get(field))
                    .map(|v| Span::raw(v.to_string()).width())
                    .max()
                    .unwrap_or(0),
            };
            let width = content
                .max(Span::raw(column.header.as_str()).width())
                .min(MAX_COLUMN_WIDTH);
            Constraint::Length(width as u16)
        })
        .chain(iter::once(Constraint::Length(1)))
        .collect()
}
