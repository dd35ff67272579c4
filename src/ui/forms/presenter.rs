//! Field presenters: one control each, bound to a form field
//!
//! A presenter is configured once with its static data (label, placeholder,
//! options) and then driven by two inputs: a `FieldView` to draw,
//! and a `FieldBinding` to write key input through. Presenters never
//! validate; errors come from the controller.

use super::field_renderer::{draw_checkbox, draw_select, draw_text_input};
use crate::state::{FieldBinding, FieldName, FieldValue, FieldView, ValidationSchema};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Rows a presenter occupies: bordered control plus one message line
pub const PRESENTER_HEIGHT: u16 = 4;

/// Flavor of a text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
}

#[derive(Debug, Clone)]
pub struct TextConfig {
    pub name: FieldName,
    pub label: String,
    pub placeholder: String,
    pub input_type: InputType,
    /// Length limit taken from the schema, shown as a counter
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct CheckboxConfig {
    pub name: FieldName,
    /// Text rendered beside the box
    pub label: String,
}

/// One entry of a select: stored value and display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct SelectConfig {
    pub name: FieldName,
    pub label: String,
    pub options: Vec<SelectOption>,
}

impl SelectConfig {
    /// Index of the option holding `value`, if it is one of ours
    pub fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    /// Display text for `value`; unknown values are shown verbatim
    pub fn display<'a>(&'a self, value: &'a str) -> &'a str {
        self.position(value)
            .map(|i| self.options[i].label.as_str())
            .unwrap_or(value)
    }

    fn step(&self, value: &str, forward: bool) -> Option<&SelectOption> {
        let len = self.options.len();
        if len == 0 {
            return None;
        }
        let next = match (self.position(value), forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(0), false) => len - 1,
            (Some(i), false) => i - 1,
            (None, _) => 0,
        };
        self.options.get(next)
    }
}

/// The three presenter variants
#[derive(Debug, Clone)]
pub enum Presenter {
    Text(TextConfig),
    Checkbox(CheckboxConfig),
    Select(SelectConfig),
}

impl Presenter {
    pub fn name(&self) -> FieldName {
        match self {
            Presenter::Text(c) => c.name,
            Presenter::Checkbox(c) => c.name,
            Presenter::Select(c) => c.name,
        }
    }

    /// Apply a key to the bound field. Returns true when the key was consumed.
    pub fn handle_key(&self, key: KeyEvent, binding: &mut dyn FieldBinding) -> bool {
        match self {
            Presenter::Text(_) => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let mut text = binding.value().as_text().to_string();
                    text.push(c);
                    binding.set_value(FieldValue::Text(text));
                    true
                }
                KeyCode::Backspace => {
                    let mut text = binding.value().as_text().to_string();
                    if text.pop().is_some() {
                        binding.set_value(FieldValue::Text(text));
                    }
                    true
                }
                _ => false,
            },
            Presenter::Checkbox(_) => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    let checked = binding.value().as_bool();
                    binding.set_value(FieldValue::Bool(!checked));
                    true
                }
                _ => false,
            },
            Presenter::Select(config) => {
                let forward = match key.code {
                    KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => true,
                    KeyCode::Left | KeyCode::Char('h') => false,
                    _ => return false,
                };
                let current = binding.value();
                if let Some(option) = config.step(current.as_text(), forward) {
                    binding.set_value(FieldValue::Text(option.value.clone()));
                }
                true
            }
        }
    }

    /// Draw the control for `state`
    pub fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &dyn FieldView,
        is_active: bool,
        show_placeholders: bool,
    ) {
        match self {
            Presenter::Text(config) => {
                draw_text_input(frame, area, config, state, is_active, show_placeholders)
            }
            Presenter::Checkbox(config) => draw_checkbox(frame, area, config, state, is_active),
            Presenter::Select(config) => draw_select(frame, area, config, state, is_active),
        }
    }
}

/// The signup form's presenters, in focus order
pub fn signup_presenters(schema: &ValidationSchema) -> Vec<Presenter> {
    // Required fields get a trailing marker
    let label = |name: FieldName, title: &str| {
        if schema.is_required(name) {
            format!("{title} *")
        } else {
            title.to_string()
        }
    };
    let text = |name: FieldName, title: &str, placeholder: &str, input_type: InputType| {
        Presenter::Text(TextConfig {
            name,
            label: label(name, title),
            placeholder: placeholder.to_string(),
            input_type,
            max_length: schema.max_length(name),
        })
    };

    vec![
        text(FieldName::FirstName, "First Name", "John", InputType::Text),
        text(FieldName::LastName, "Last Name", "Doe", InputType::Text),
        text(
            FieldName::Email,
            "Email Address",
            "John@example.com",
            InputType::Email,
        ),
        Presenter::Select(SelectConfig {
            name: FieldName::JobType,
            label: label(FieldName::JobType, "Job Type"),
            options: crate::state::JOB_TYPE_OPTIONS
                .iter()
                .map(|(value, label)| SelectOption {
                    value: value.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }),
        Presenter::Checkbox(CheckboxConfig {
            name: FieldName::AcceptedTerms,
            label: label(FieldName::AcceptedTerms, "I accept the terms and conditions"),
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory binding so presenters can be exercised without a controller
    struct FakeBinding {
        value: FieldValue,
        touched: bool,
        writes: usize,
    }

    impl FakeBinding {
        fn new(value: FieldValue) -> Self {
            Self {
                value,
                touched: false,
                writes: 0,
            }
        }
    }

    impl FieldView for FakeBinding {
        fn value(&self) -> FieldValue {
            self.value.clone()
        }
        fn error(&self) -> Option<&str> {
            None
        }
        fn touched(&self) -> bool {
            self.touched
        }
    }

    impl FieldBinding for FakeBinding {
        fn set_value(&mut self, value: FieldValue) {
            self.writes += 1;
            self.value = value;
        }
        fn set_touched(&mut self) {
            self.touched = true;
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn presenter(name: FieldName) -> Presenter {
        signup_presenters(&ValidationSchema::signup())
            .into_iter()
            .find(|p| p.name() == name)
            .unwrap()
    }

    #[test]
    fn test_presenters_follow_field_order() {
        let names: Vec<FieldName> = signup_presenters(&ValidationSchema::signup())
            .iter()
            .map(Presenter::name)
            .collect();
        assert_eq!(names, FieldName::ALL.to_vec());
    }

    #[test]
    fn test_text_presenter_picks_up_schema_limit() {
        let Presenter::Text(config) = presenter(FieldName::FirstName) else {
            panic!("first name should be a text input");
        };
        assert_eq!(config.max_length, Some(15));
        assert_eq!(config.placeholder, "John");
        assert_eq!(config.label, "First Name *");
    }

    #[test]
    fn test_text_typing_and_backspace() {
        let p = presenter(FieldName::FirstName);
        let mut binding = FakeBinding::new(FieldValue::default());
        assert!(p.handle_key(key(KeyCode::Char('J')), &mut binding));
        assert!(p.handle_key(key(KeyCode::Char('o')), &mut binding));
        assert!(p.handle_key(key(KeyCode::Backspace), &mut binding));
        assert_eq!(binding.value, FieldValue::Text("J".into()));
    }

    #[test]
    fn test_backspace_on_empty_writes_nothing() {
        let p = presenter(FieldName::Email);
        let mut binding = FakeBinding::new(FieldValue::default());
        assert!(p.handle_key(key(KeyCode::Backspace), &mut binding));
        assert_eq!(binding.writes, 0);
    }

    #[test]
    fn test_text_ignores_control_chords() {
        let p = presenter(FieldName::LastName);
        let mut binding = FakeBinding::new(FieldValue::default());
        let chord = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(!p.handle_key(chord, &mut binding));
        assert_eq!(binding.writes, 0);
    }

    #[test]
    fn test_checkbox_toggles() {
        let p = presenter(FieldName::AcceptedTerms);
        let mut binding = FakeBinding::new(FieldValue::Bool(false));
        assert!(p.handle_key(key(KeyCode::Char(' ')), &mut binding));
        assert_eq!(binding.value, FieldValue::Bool(true));
        assert!(p.handle_key(key(KeyCode::Enter), &mut binding));
        assert_eq!(binding.value, FieldValue::Bool(false));
        assert!(!p.handle_key(key(KeyCode::Char('x')), &mut binding));
    }

    #[test]
    fn test_select_cycles_and_wraps() {
        let p = presenter(FieldName::JobType);
        let mut binding = FakeBinding::new(FieldValue::default());
        assert!(p.handle_key(key(KeyCode::Right), &mut binding));
        assert_eq!(binding.value, FieldValue::Text("designer".into()));
        assert!(p.handle_key(key(KeyCode::Left), &mut binding));
        assert!(p.handle_key(key(KeyCode::Left), &mut binding));
        assert_eq!(binding.value, FieldValue::Text("other".into()));
        assert!(p.handle_key(key(KeyCode::Char(' ')), &mut binding));
        assert_eq!(binding.value, FieldValue::Text(String::new()));
    }

    #[test]
    fn test_select_unknown_value_jumps_to_first_option() {
        let p = presenter(FieldName::JobType);
        let mut binding = FakeBinding::new(FieldValue::Text("manager".into()));
        assert!(p.handle_key(key(KeyCode::Right), &mut binding));
        assert_eq!(binding.value, FieldValue::Text(String::new()));
    }

    #[test]
    fn test_select_display_labels() {
        let Presenter::Select(config) = presenter(FieldName::JobType) else {
            panic!("job type should be a select");
        };
        assert_eq!(config.display(""), "Select a job type");
        assert_eq!(config.display("development"), "Developer");
        assert_eq!(config.display("manager"), "manager");
    }

    #[test]
    fn test_presenters_never_touch() {
        let p = presenter(FieldName::FirstName);
        let mut binding = FakeBinding::new(FieldValue::default());
        p.handle_key(key(KeyCode::Char('a')), &mut binding);
        assert!(!binding.touched);
    }
}
