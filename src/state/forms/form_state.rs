//! Signup form state: controller plus focus

use super::binding::{BoundField, FieldBinding};
use super::controller::FormController;
use super::field::FieldName;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons on the action panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Submit,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Submit, FormButton::Reset];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Reset => "Reset",
        }
    }
}

/// Index of the action panel in the focus ring (after the five fields)
const BUTTONS_ROW: usize = FieldName::ALL.len();

/// The mounted signup form
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub controller: FormController,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Submit, 1=Reset)
    pub selected_button: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::with_controller(FormController::signup())
    }

    pub fn with_controller(controller: FormController) -> Self {
        Self {
            controller,
            active_field_index: 0,
            selected_button: 0,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    /// The field that currently has focus, if focus is on a field
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    /// Binding for the focused field
    pub fn bind_active(&mut self) -> Option<BoundField<'_>> {
        let name = self.active_field_name()?;
        Some(BoundField::new(&mut self.controller, name))
    }

    pub fn selected(&self) -> FormButton {
        FormButton::ALL[self.selected_button % FormButton::ALL.len()]
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FormButton::ALL.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FormButton::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Whether the submit button accepts presses
    pub fn can_submit(&self) -> bool {
        !self.controller.is_submitting()
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        BUTTONS_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    /// Moving focus away from a field blurs it, which marks it touched
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(BUTTONS_ROW);
        if index == self.active_field_index {
            return;
        }
        if let Some(mut leaving) = self.bind_active() {
            leaving.set_touched();
        }
        self.active_field_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldView;

    #[test]
    fn test_new_has_correct_defaults() {
        let form = SignupForm::new();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.selected(), FormButton::Submit);
        assert_eq!(form.active_field_name(), Some(FieldName::FirstName));
        assert!(form.can_submit());
    }

    #[test]
    fn test_field_count_includes_buttons_row() {
        assert_eq!(SignupForm::new().field_count(), 6);
    }

    #[test]
    fn test_next_field_blurs_previous() {
        let mut form = SignupForm::new();
        form.next_field();
        assert_eq!(form.active_field_name(), Some(FieldName::LastName));
        assert!(form.controller.is_touched(FieldName::FirstName));
        assert!(!form.controller.is_touched(FieldName::LastName));
        assert_eq!(
            form.controller
                .field_state(FieldName::FirstName)
                .visible_error(),
            Some("Required")
        );
    }

    #[test]
    fn test_focus_cycles_through_buttons_row() {
        let mut form = SignupForm::new();
        for _ in 0..5 {
            form.next_field();
        }
        assert!(form.is_buttons_row_active());
        assert_eq!(form.active_field_name(), None);
        form.next_field();
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_buttons() {
        let mut form = SignupForm::new();
        form.prev_field();
        assert!(form.is_buttons_row_active());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = SignupForm::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, 5);
    }

    #[test]
    fn test_refocusing_same_field_does_not_touch() {
        let mut form = SignupForm::new();
        form.set_active_field(0);
        assert!(!form.controller.is_touched(FieldName::FirstName));
    }

    #[test]
    fn test_buttons_wrap() {
        let mut form = SignupForm::new();
        form.prev_button();
        assert_eq!(form.selected(), FormButton::Reset);
        form.next_button();
        assert_eq!(form.selected(), FormButton::Submit);
    }

    #[test]
    fn test_bind_active_none_on_buttons_row() {
        let mut form = SignupForm::new();
        form.active_field_index = 5;
        assert!(form.bind_active().is_none());
    }
}
