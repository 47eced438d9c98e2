//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field using FormField from the domain layer.
///
/// `extra` is appended to the title, e.g. a remove shortcut on route stops.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    extra: Option<&str>,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = Span::styled(
        if is_active && !field.is_choice() { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let display_value = field.display_value();
    let spans = if display_value.is_empty() {
        // Cursor before the placeholder so it reads as an empty input
        vec![
            cursor,
            Span::styled(
                field.placeholder.as_str(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]
    } else {
        let style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        vec![Span::styled(display_value, style), cursor]
    };

    let required = if field.required { " *" } else { "" };
    let title = match extra {
        Some(extra) => format!(" {}{required}  {extra} ", field.label),
        None => format!(" {}{required} ", field.label),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
