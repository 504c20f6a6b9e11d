//! Row selection checkbox cell.

use ratatui::{layout::Rect, style::Style, text::Span, widgets::Paragraph, Frame};

use crate::ui::theme::Theme;

/// Checkbox text for a selection state.
pub fn checkbox_label(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Render the selection checkbox of a row.
pub fn render_checkbox(frame: &mut Frame, area: Rect, checked: bool, focused: bool, theme: &Theme) {
    let style = if focused {
        theme.focused_cell()
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(checkbox_label(checked), style)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_label() {
        assert_eq!(checkbox_label(true), "[x]");
        assert_eq!(checkbox_label(false), "[ ]");
    }
}
