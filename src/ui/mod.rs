//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

pub use forms::{signup_presenters, Presenter};

use crate::app::App;
use components::{render_error_dialog, render_notice_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    forms::draw_signup(frame, main_area, app);

    layout::draw_status_bar(frame, app);

    // Modal overlays, errors on top
    if let Some(notice) = &app.state.notice {
        render_notice_dialog(frame, notice);
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
