//! Field rendering utilities for forms

use super::presenter::{CheckboxConfig, InputType, SelectConfig, TextConfig};
use crate::state::FieldView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CURSOR: &str = "▌";

/// Border/label color: red when showing an error, cyan when focused
fn frame_color(has_error: bool, is_active: bool) -> Color {
    if has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Split a presenter area into the bordered control and the message line
fn split_control(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Control
            Constraint::Length(1), // Validation message
        ])
        .split(area);
    (chunks[0], chunks[1])
}

fn control_block(label: &str, has_error: bool, is_active: bool) -> Block<'static> {
    let color = frame_color(has_error, is_active);
    Block::default()
        .title(Span::styled(format!(" {label} "), Style::default().fg(color)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

/// Render the validation message under a control, if there is one to show
fn draw_message(frame: &mut Frame, area: Rect, state: &dyn FieldView) {
    if let Some(error) = state.visible_error() {
        let message = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(message, area);
    }
}

/// Draw a single-line text input
pub fn draw_text_input(
    frame: &mut Frame,
    area: Rect,
    config: &TextConfig,
    state: &dyn FieldView,
    is_active: bool,
    show_placeholder: bool,
) {
    let (control_area, message_area) = split_control(area);
    let has_error = state.visible_error().is_some();
    let current = state.value();
    let value = current.as_text();

    let mut spans = Vec::new();
    if value.is_empty() && show_placeholder {
        spans.push(Span::styled(
            config.placeholder.as_str(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(value, style));
    }
    if is_active {
        // Cursor sits after the value, or before the placeholder
        let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));
        if value.is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    let mut block = control_block(&config.label, has_error, is_active);
    if let Some(max) = config.max_length {
        let count = value.chars().count();
        let color = if count > max { Color::Red } else { Color::DarkGray };
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {count}/{max} "),
                Style::default().fg(color),
            ))
            .alignment(Alignment::Right),
        );
    } else if config.input_type == InputType::Email {
        block = block.title_bottom(
            Line::from(Span::styled(" email ", Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Right),
        );
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), control_area);
    draw_message(frame, message_area, state);
}

/// Draw a checkbox with its label text beside the box
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    config: &CheckboxConfig,
    state: &dyn FieldView,
    is_active: bool,
) {
    let (control_area, message_area) = split_control(area);
    let has_error = state.visible_error().is_some();
    let checked = state.value().as_bool();

    let mark = if checked { "[x] " } else { "[ ] " };
    let mark_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let color = frame_color(has_error, is_active);
    let label_style = if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let line = Line::from(vec![
        Span::styled(mark, mark_style),
        Span::styled(config.label.as_str(), label_style),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(Paragraph::new(line).block(block), control_area);
    draw_message(frame, message_area, state);
}

/// Draw a select showing the current option between arrows
pub fn draw_select(
    frame: &mut Frame,
    area: Rect,
    config: &SelectConfig,
    state: &dyn FieldView,
    is_active: bool,
) {
    let (control_area, message_area) = split_control(area);
    let has_error = state.visible_error().is_some();
    let current = state.value();
    let value = current.as_text();

    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(config.display(value), value_style),
        Span::styled(" ▶", arrow_style),
    ]);

    let block = control_block(&config.label, has_error, is_active);
    frame.render_widget(Paragraph::new(line).block(block), control_area);
    draw_message(frame, message_area, state);
}

#[cfg(test)]
mod tests {
    use super::super::presenter::SelectOption;
    use super::*;
    use crate::state::{FieldName, FieldState, FieldValue};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn text_config() -> TextConfig {
        TextConfig {
            name: FieldName::FirstName,
            label: "First Name".into(),
            placeholder: "John".into(),
            input_type: InputType::Text,
            max_length: Some(15),
        }
    }

    fn render(draw: impl FnOnce(&mut Frame, Rect)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                draw(f, area)
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn state(value: FieldValue, touched: bool, error: Option<&str>) -> FieldState {
        FieldState {
            value,
            touched,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_text_input_hides_untouched_error() {
        let s = state(FieldValue::default(), false, Some("Required"));
        let out = render(|f, area| draw_text_input(f, area, &text_config(), &s, false, true));
        assert!(out.contains("First Name"));
        assert!(out.contains("John"));
        assert!(!out.contains("Required"));
    }

    #[test]
    fn test_text_input_shows_touched_error() {
        let s = state(FieldValue::default(), true, Some("Required"));
        let out = render(|f, area| draw_text_input(f, area, &text_config(), &s, false, true));
        assert!(out.contains("Required"));
    }

    #[test]
    fn test_text_input_shows_length_counter() {
        let s = state(FieldValue::Text("Jane".into()), false, None);
        let out = render(|f, area| draw_text_input(f, area, &text_config(), &s, true, true));
        assert!(out.contains("Jane"));
        assert!(out.contains("4/15"));
    }

    #[test]
    fn test_placeholder_can_be_disabled() {
        let s = state(FieldValue::default(), false, None);
        let out = render(|f, area| draw_text_input(f, area, &text_config(), &s, false, false));
        assert!(!out.contains("John"));
    }

    #[test]
    fn test_checkbox_renders_mark_and_label() {
        let config = CheckboxConfig {
            name: FieldName::AcceptedTerms,
            label: "I accept".into(),
        };
        let s = state(FieldValue::Bool(true), false, None);
        let out = render(|f, area| draw_checkbox(f, area, &config, &s, false));
        assert!(out.contains("[x] I accept"));
    }

    #[test]
    fn test_select_renders_option_label() {
        let config = SelectConfig {
            name: FieldName::JobType,
            label: "Job Type".into(),
            options: vec![SelectOption {
                value: "product".into(),
                label: "Product Manager".into(),
            }],
        };
        let s = state(FieldValue::Text("product".into()), true, None);
        let out = render(|f, area| draw_select(f, area, &config, &s, false));
        assert!(out.contains("Job Type"));
        assert!(out.contains("Product Manager"));
    }
}
