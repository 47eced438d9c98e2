//! Page list shown when no editor is mounted

use crate::app::App;
use crate::state::PageKind;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Choose a bus attribute to edit",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (idx, kind) in PageKind::ALL.iter().enumerate() {
        let is_selected = app.state.sidebar_index == idx;
        let marker = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{} ", idx + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(kind.title(), style),
        ]));
    }

    let block = Block::default()
        .title(" Bus Desk ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
