//! Main application state and event loop logic.
//!
//! The application is the table's host: it owns the authoritative rows and
//! the column schema, passes them to the table on every render, and replaces
//! its rows whenever the table reports an update. State changes follow The
//! Elm Architecture (TEA): events go through [`App::update`] and the view is
//! a function of the current state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, info, trace};

use crate::config::Settings;
use crate::data::{Column, Rows};
use crate::events::{Event, KeyBindings};
use crate::ui::{DataTable, DataTableAction, InputMode};

/// Hints shown in navigation mode.
const NORMAL_HINTS: &str =
    "↑↓←→ move  Enter activate  Space select  o expand  d delete selected  q quit";

/// Hints shown while a cell editor is open.
const INSERT_HINTS: &str = "Type to edit  Esc/Enter done";

/// The main application struct that holds all state.
pub struct App {
    /// Whether the application should quit.
    should_quit: bool,
    /// The authoritative collection.
    rows: Rows,
    /// The column schema.
    columns: Vec<Column>,
    /// The table widget.
    table: DataTable,
    /// Message describing the last change, shown in the footer.
    status: Option<String>,
}

impl App {
    /// Create a new application instance.
    pub fn new(rows: Rows, columns: Vec<Column>, settings: &Settings) -> Self {
        debug!(
            rows = rows.len(),
            columns = columns.len(),
            vim_mode = settings.vim_mode,
            "Creating application"
        );

        Self {
            should_quit: false,
            rows,
            columns,
            table: DataTable::with_bindings(KeyBindings::new(settings.vim_mode)),
            status: None,
        }
    }

    /// Get the current rows.
    pub fn rows(&self) -> &Rows {
        &self.rows
    }

    /// Get the column schema.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get the table widget.
    pub fn table(&self) -> &DataTable {
        &self.table
    }

    /// Get the last status message.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Replace the collection with one published by the table.
    pub fn set_rows(&mut self, rows: Rows) {
        let removed = self.rows.len().saturating_sub(rows.len());
        self.status = Some(if removed > 0 {
            info!(removed, remaining = rows.len(), "Rows deleted");
            format!("Deleted {} row{}", removed, if removed == 1 { "" } else { "s" })
        } else {
            "Edited".to_string()
        });

        self.rows = rows;
        self.table.sync(&self.rows);
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Quit => {
                info!("Quit event received");
                self.should_quit = true;
            }
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => {}
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Ctrl+C always quits, even while editing
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        match self
            .table
            .handle_input(key_event, &self.rows, &self.columns)
        {
            Some(DataTableAction::Update(rows)) => self.set_rows(rows),
            Some(DataTableAction::Quit) => {
                info!("Quit requested");
                self.should_quit = true;
            }
            None => {}
        }
    }

    /// Render the application UI.
    pub fn view(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(1),    // Table
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);
        self.table
            .render(frame, chunks[1], &self.rows, &self.columns);
        self.render_footer(frame, chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("Data Table")
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(title, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let (mode, hints) = match self.table.input_mode() {
            InputMode::Normal => (" NORMAL ", NORMAL_HINTS),
            InputMode::Insert => (" EDIT ", INSERT_HINTS),
        };

        let mut spans = vec![
            Span::styled(mode, Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" "),
        ];
        if self.table.editor().is_some_and(|e| e.is_invalid()) {
            spans.push(Span::styled(
                "Not a number, value unchanged  ",
                Style::default().fg(Color::Red),
            ));
        } else if let Some(status) = &self.status {
            spans.push(Span::styled(
                format!("{}  ", status),
                Style::default().fg(Color::Green),
            ));
        }
        spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::data::{row, RowId, Value};

    fn app() -> App {
        let rows = vec![
            row(0, [("name", Value::from("A")), ("age", Value::from(28))]),
            row(1, [("name", Value::from("B")), ("age", Value::from(30))]),
            row(2, [("name", Value::from("C")), ("age", Value::from(41))]),
        ];
        let columns = vec![
            Column::select("Select"),
            Column::new("Name", "name"),
            Column::new("Age", "age").editable(),
        ];
        App::new(rows, columns, &Settings::default())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_event() {
        let mut app = app();
        app.update(Event::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        app.update(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut app = app();
        app.update(key(KeyCode::Right));
        app.update(key(KeyCode::Right));
        app.update(key(KeyCode::Enter));
        assert_eq!(app.table().input_mode(), InputMode::Insert);

        app.update(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn test_bulk_delete_replaces_rows() {
        let mut app = app();
        app.update(key(KeyCode::Char(' ')));
        app.update(key(KeyCode::Down));
        app.update(key(KeyCode::Down));
        app.update(key(KeyCode::Char(' ')));
        app.update(key(KeyCode::Char('d')));

        let ids: Vec<RowId> = app.rows().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![RowId(1)]);
        assert_eq!(app.table().state().selected_count(), 0);
        assert_eq!(app.status(), Some("Deleted 2 rows"));
    }

    #[test]
    fn test_edit_updates_rows() {
        let mut app = app();
        app.update(key(KeyCode::Right));
        app.update(key(KeyCode::Right));
        app.update(key(KeyCode::Enter));
        app.update(key(KeyCode::Char('5')));

        assert_eq!(app.rows()[0].get("age"), Some(&Value::Number(285.0)));
        assert_eq!(app.status(), Some("Edited"));
    }

    #[test]
    fn test_view_renders_table_and_footer() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("Data Table"));
        assert!(screen.contains("NORMAL"));
        assert!(screen.contains("Name"));
    }
}
