//! Editor page layout shared by every bus attribute page
//!
//! Layout:
//! +------------------------------------------+
//! |  Title                                   |
//! |  [field]                                 |
//! |  [field]                                 |
//! |  photo preview (details page)            |
//! |  inline error                            |
//! |  [ Update Bus ... ]                      |
//! +------------------------------------------+

use super::field_renderer::draw_field;
use crate::photo::PhotoPreview;
use crate::platform::REMOVE_STOP_SHORTCUT;
use crate::state::{BusNameForm, BusRouteForm, EditorForm, EditorPage, FormField};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

enum Row<'a> {
    Field {
        field: &'a FormField,
        is_active: bool,
        extra: Option<String>,
    },
    Preview(PhotoPreview),
    Error(&'a str),
    Submit,
}

impl Row<'_> {
    fn height(&self) -> u16 {
        match self {
            Row::Field { .. } => 3,
            Row::Preview(_) => 2,
            Row::Error(_) => 1,
            Row::Submit => BUTTON_HEIGHT,
        }
    }
}

fn collect_rows(page: &EditorPage) -> Vec<Row<'_>> {
    let form = page.form.as_form();
    let active = form.active_field();
    let mut rows = Vec::new();

    for index in 0..form.field_count() {
        let Some(field) = form.get_field(index) else {
            continue;
        };
        let extra = match &page.form {
            EditorForm::BusRoute(route)
                if index >= BusRouteForm::stop_control(0) && route.can_remove_stop() =>
            {
                Some(format!("{REMOVE_STOP_SHORTCUT}:remove"))
            }
            _ => None,
        };
        rows.push(Row::Field {
            field,
            is_active: index == active,
            extra,
        });

        if let EditorForm::BusName(details) = &page.form {
            if index == BusNameForm::PHOTO {
                if let Some(photo) = &details.photo {
                    rows.push(Row::Preview(photo.preview()));
                }
            }
        }
    }

    if let Some(message) = page.error_message() {
        rows.push(Row::Error(message));
    }
    rows.push(Row::Submit);
    rows
}

/// Draw the mounted editor page
pub fn draw_editor_page(frame: &mut Frame, area: Rect, page: &EditorPage) {
    let block = Block::default()
        .title(format!(" {} ", page.kind().title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = collect_rows(page);
    let mut constraints: Vec<Constraint> =
        rows.iter().map(|r| Constraint::Length(r.height())).collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let submit_active = page.form.as_form().is_submit_active();

    for (row, chunk) in rows.into_iter().zip(chunks.iter().copied()) {
        match row {
            Row::Field {
                field,
                is_active,
                extra,
            } => draw_field(frame, chunk, field, is_active, extra.as_deref()),
            Row::Preview(preview) => draw_preview(frame, chunk, &preview),
            Row::Error(message) => {
                let error = Paragraph::new(message).style(Style::default().fg(Color::Red));
                frame.render_widget(error, chunk);
            }
            Row::Submit => {
                let label = page.submit_label();
                let width = (label.chars().count() as u16 + 4).min(chunk.width);
                let button_area = Rect { width, ..chunk };
                render_button(
                    frame,
                    button_area,
                    label,
                    submit_active,
                    !page.is_submitting(),
                );
            }
        }
    }
}

/// Name, type and size of the chosen photo
fn draw_preview(frame: &mut Frame, area: Rect, preview: &PhotoPreview) {
    let lines = vec![
        Line::from(vec![
            Span::raw("Selected File: "),
            Span::styled(
                preview.file_name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} · {}", preview.mime_type, preview.size_label),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
