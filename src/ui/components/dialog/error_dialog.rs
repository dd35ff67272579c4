//! Error dialog component

use super::base::{dismiss_hint, render_dialog, DialogConfig, TextFlow};
use ratatui::{style::Color, Frame};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            flow: TextFlow::Wrap,
            hint: Some(dismiss_hint()),
            max_width: 60,
        },
    );
}
