//! Column header row.

use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};

use crate::data::Column;
use crate::ui::theme::Theme;

/// Render one header cell per column, in schema order.
///
/// `cells` holds the area of each column on the header line.
pub fn render_header(frame: &mut Frame, cells: &[Rect], columns: &[Column], theme: &Theme) {
    for (column, area) in columns.iter().zip(cells) {
        frame.render_widget(
            Paragraph::new(Span::styled(column.header.as_str(), theme.header())),
            *area,
        );
    }
}
