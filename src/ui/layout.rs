//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{ADD_STOP_SHORTCUT, REMOVE_STOP_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{PageKind, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with one boxed button per page
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(PageKind::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, kind) in PageKind::ALL.iter().enumerate() {
        let is_selected = match app.state.current_view {
            View::Editor(open) => open == *kind,
            View::Home => app.state.sidebar_index == idx,
        };
        // Pages are only reachable from the list
        let is_enabled = matches!(app.state.current_view, View::Home) || is_selected;

        render_sidebar_button(
            frame,
            chunks[idx + 1],
            &format!("{}", idx + 1),
            kind.nav_label(),
            is_selected,
            is_enabled,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.api_base_url),
        Style::default().fg(Color::Blue),
    )];

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Validation hints and photo selection errors
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Home => "j/k:nav  Enter/1-5:open  q:quit".to_string(),
        View::Editor(PageKind::BusRoute) => format!(
            "Tab:next  {ADD_STOP_SHORTCUT}:add stop  {REMOVE_STOP_SHORTCUT}:remove  {SUBMIT_SHORTCUT}:update  Esc:back"
        ),
        View::Editor(PageKind::BusName) => {
            format!("Tab:next  Enter:choose photo  {SUBMIT_SHORTCUT}:update  Esc:back")
        }
        View::Editor(PageKind::BusFare | PageKind::BusType) => {
            format!("Tab:next  ←/→:select  {SUBMIT_SHORTCUT}:update  Esc:back")
        }
        View::Editor(PageKind::BusTiming) => {
            format!("Tab:next  HH:MM  {SUBMIT_SHORTCUT}:update  Esc:back")
        }
    }
}
