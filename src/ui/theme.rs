//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the table.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Highlight color for the focused row.
    pub highlight: Color,
    /// Background of selected rows.
    pub selected_bg: Color,
    /// Background of the expanded row and its details panel.
    pub expanded_bg: Color,
    /// Color of muted text (borders, hints).
    pub muted: Color,
    /// Color of invalid input.
    pub error: Color,
    /// Color of the bulk delete control.
    pub danger: Color,
}

impl Theme {
    /// Style of header cells.
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Base style of a body row.
    pub fn row(&self, selected: bool, expanded: bool) -> Style {
        let style = Style::default().fg(self.fg);
        if selected {
            style.bg(self.selected_bg)
        } else if expanded {
            style.bg(self.expanded_bg)
        } else {
            style
        }
    }

    /// Style added on top of the focused cell.
    pub fn focused_cell(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Style of an editable cell that is not being edited.
    pub fn editable(&self) -> Style {
        Style::default().add_modifier(Modifier::UNDERLINED)
    }

    /// Style of an open cell editor.
    pub fn editing(&self, invalid: bool) -> Style {
        let color = if invalid { self.error } else { Color::Yellow };
        Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style of the details panel.
    pub fn details(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.expanded_bg)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style of the bulk delete control.
    pub fn delete_control(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of borders and hints.
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            highlight: Color::Cyan,
            selected_bg: Color::Rgb(40, 60, 90),
            expanded_bg: Color::Rgb(35, 35, 35),
            muted: Color::DarkGray,
            error: Color::Red,
            danger: Color::Red,
        }
    }
}
