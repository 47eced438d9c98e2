//! Blocking confirmation shown after a successful update

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the confirmation centered on the screen
pub fn render_alert_dialog(frame: &mut Frame, message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" for OK"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Updated",
            accent: Color::Green,
            message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
