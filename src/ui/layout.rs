//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::SubmissionState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
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

    let mut spans = vec![];

    // Submission state
    let controller = &app.state.form.controller;
    let state = match controller.submission() {
        SubmissionState::Idle => Span::styled(" ● idle ", Style::default().fg(Color::Green)),
        SubmissionState::Submitting { ticket } => Span::styled(
            format!(" ◌ submitting #{ticket} "),
            Style::default().fg(Color::Yellow),
        ),
    };
    spans.push(state);

    if controller.is_dirty() {
        spans.push(Span::styled("[modified] ", Style::default().fg(Color::Yellow)));
    }

    spans.push(Span::styled(
        format!("Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset  Esc:quit"),
        Style::default().fg(Color::Gray),
    ));

    if controller.submit_count() > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("attempts: {}", controller.submit_count()),
            Style::default().fg(Color::Gray),
        ));
        let error_count = controller.errors().len();
        if error_count > 0 {
            spans.push(Span::styled(
                format!(" errors: {error_count}"),
                Style::default().fg(Color::Red),
            ));
        }
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}
