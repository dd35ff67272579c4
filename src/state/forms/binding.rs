//! Field binding: the capability presenters use to reach the controller

use super::controller::FormController;
use super::field::{FieldName, FieldValue, FieldView};

/// Read/write access to one field.
///
/// Presenters only ever write to a form through this trait, so the same
/// presenter works against the real controller or a test double.
pub trait FieldBinding: FieldView {
    fn set_value(&mut self, value: FieldValue);
    /// Blur: mark the field touched
    fn set_touched(&mut self);
}

/// A field of a `FormController`, borrowed for the duration of one event
pub struct BoundField<'a> {
    controller: &'a mut FormController,
    name: FieldName,
}

impl<'a> BoundField<'a> {
    pub fn new(controller: &'a mut FormController, name: FieldName) -> Self {
        Self { controller, name }
    }
}

impl FieldView for BoundField<'_> {
    fn value(&self) -> FieldValue {
        self.controller.values().get(self.name)
    }

    fn error(&self) -> Option<&str> {
        self.controller.error(self.name)
    }

    fn touched(&self) -> bool {
        self.controller.is_touched(self.name)
    }
}

impl FieldBinding for BoundField<'_> {
    fn set_value(&mut self, value: FieldValue) {
        self.controller.set_value(self.name, value);
    }

    fn set_touched(&mut self) {
        self.controller.set_touched(self.name);
    }
}
