//! Signup form rendering

use crate::app::App;
use crate::state::{Form, FormButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::presenter::PRESENTER_HEIGHT;

/// Draw the signup form with action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the five presenters stacked vertically
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let form_focused = !form.is_buttons_row_active() && !app.state.has_modal();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = app
        .presenters
        .iter()
        .map(|_| Constraint::Length(PRESENTER_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0)); // Remaining space / help

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (index, presenter) in app.presenters.iter().enumerate() {
        let state = form.controller.field_state(presenter.name());
        presenter.draw(
            frame,
            chunks[index],
            &state,
            form.active_field() == index,
            app.config.show_placeholders(),
        );
    }

    if let Some(help_area) = chunks.last() {
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next field  "),
            Span::styled("←/→", Style::default().fg(Color::Cyan)),
            Span::raw(": choose  "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(": toggle"),
        ]))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, *help_area);
    }
}

/// Draw the Submit/Reset action panel
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.is_buttons_row_active() && !app.state.has_modal();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    for (index, button) in FormButton::ALL.iter().enumerate() {
        let (label, enabled, accent) = match button {
            FormButton::Submit if !form.can_submit() => ("Submitting…", false, Color::Green),
            FormButton::Submit => (button.label(), true, Color::Green),
            FormButton::Reset => (button.label(), true, Color::Gray),
        };
        render_action_button(
            frame,
            button_chunks[index],
            label,
            is_focused && form.selected() == *button,
            enabled,
            Some(accent),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, FieldValue};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 28)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                draw(f, area, app)
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_fresh_form_shows_labels_and_no_errors() {
        let app = App::for_tests();
        let out = render(&app);
        for label in ["First Name", "Last Name", "Email Address", "Job Type"] {
            assert!(out.contains(label), "{label}");
        }
        assert!(out.contains("I accept the terms and conditions"));
        assert!(out.contains("Select a job type"));
        assert!(!out.contains("Required"));
        assert!(out.contains("Submit"));
        assert!(out.contains("Reset"));
    }

    #[test]
    fn test_failed_submit_shows_first_name_required() {
        let mut app = App::for_tests();
        let controller = &mut app.state.form.controller;
        controller.set_value(FieldName::LastName, FieldValue::Text("Doe".into()));
        controller.set_value(FieldName::Email, FieldValue::Text("jane@example.com".into()));
        controller.set_value(FieldName::AcceptedTerms, FieldValue::Bool(true));
        controller.set_value(FieldName::JobType, FieldValue::Text("designer".into()));
        let _ = controller.submit();

        let out = render(&app);
        let rows: Vec<&str> = out.lines().collect();
        let title_row = rows
            .iter()
            .position(|row| row.contains("First Name *"))
            .expect("first name control drawn");
        // Border, input, border, then the message line
        assert!(rows[title_row + 3].contains("Required"), "{out}");
        assert_eq!(out.matches("Required").count(), 1, "{out}");
    }

    #[test]
    fn test_untouched_first_name_hides_required() {
        let mut app = App::for_tests();
        app.state
            .form
            .controller
            .set_value(FieldName::LastName, FieldValue::Text("Doe".into()));
        let out = render(&app);
        assert!(!out.contains("Required"), "{out}");
    }

    #[test]
    fn test_submit_button_disabled_while_submitting() {
        let mut app = App::for_tests();
        let controller = &mut app.state.form.controller;
        controller.set_value(FieldName::FirstName, FieldValue::Text("Jane".into()));
        controller.set_value(FieldName::LastName, FieldValue::Text("Doe".into()));
        controller.set_value(
            FieldName::Email,
            FieldValue::Text("jane@example.com".into()),
        );
        controller.set_value(FieldName::AcceptedTerms, FieldValue::Bool(true));
        controller.set_value(
            FieldName::JobType,
            FieldValue::Text("designer".into()),
        );
        let _ = controller.submit();
        let out = render(&app);
        assert!(out.contains("Submitting…"));
    }
}
