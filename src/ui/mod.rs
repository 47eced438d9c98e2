//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Editor(_) => {
            if let Some(page) = &app.state.editor {
                forms::draw_editor_page(frame, main_area, page);
            }
        }
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // The confirmation sits on top of everything
    if let Some(message) = &app.state.alert {
        components::render_alert_dialog(frame, message);
    }
}
