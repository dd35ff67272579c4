//! Submission notice: the submitted values, blocking until dismissed

use super::base::{dismiss_hint, render_dialog, DialogConfig, TextFlow};
use crate::platform::COPY_SHORTCUT;
use crate::state::SubmitNotice;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the values of a completed submission as pretty JSON
pub fn render_notice_dialog(frame: &mut Frame, notice: &SubmitNotice) {
    let title = format!("Submitted at {}", notice.received_at);
    let mut hint = dismiss_hint();
    hint.push(Span::raw(", "));
    hint.push(Span::styled(
        COPY_SHORTCUT,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    hint.push(Span::raw(" to copy"));

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: Color::Green,
            border_color: Color::Green,
            message: &notice.body,
            flow: TextFlow::Preformatted,
            hint: Some(hint),
            max_width: 64,
        },
    );
}
