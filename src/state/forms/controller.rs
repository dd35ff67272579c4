//! Form controller: values, touched flags, errors and submission state

use super::field::{FieldName, FieldState, FieldValue};
use super::schema::{FormErrors, ValidationSchema};
use super::values::FormValues;
use std::collections::BTreeSet;

/// Whether a submission is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// Waiting on the submit handler for the ticket with this id
    Submitting { ticket: u64 },
}

/// A validated submission handed to the submit handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub values: FormValues,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values passed validation; run the handler with this submission
    Started(Submission),
    /// At least one field failed; nothing was submitted
    Rejected(FormErrors),
    /// A submission is already in flight
    Busy,
}

/// Owns the state of one mounted form instance
#[derive(Debug, Clone)]
pub struct FormController {
    schema: ValidationSchema,
    initial: FormValues,
    values: FormValues,
    touched: BTreeSet<FieldName>,
    errors: FormErrors,
    submission: SubmissionState,
    submit_count: u32,
    next_ticket: u64,
}

impl FormController {
    pub fn new(initial: FormValues, schema: ValidationSchema) -> Self {
        Self {
            schema,
            values: initial.clone(),
            initial,
            touched: BTreeSet::new(),
            errors: FormErrors::new(),
            submission: SubmissionState::Idle,
            submit_count: 0,
            next_ticket: 1,
        }
    }

    /// Controller for the signup form with empty defaults
    pub fn signup() -> Self {
        Self::new(FormValues::default(), ValidationSchema::signup())
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.submission, SubmissionState::Submitting { .. })
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Whether the values differ from the initial set
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    pub fn is_touched(&self, name: FieldName) -> bool {
        self.touched.contains(&name)
    }

    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.errors.get(&name).map(String::as_str)
    }

    /// Snapshot of one field for presenters
    pub fn field_state(&self, name: FieldName) -> FieldState {
        FieldState {
            value: self.values.get(name),
            touched: self.is_touched(name),
            error: self.error(name).map(str::to_owned),
        }
    }

    /// Update a field's value and re-validate that field.
    /// Values of the wrong kind for the field are ignored.
    pub fn set_value(&mut self, name: FieldName, value: FieldValue) {
        if !value.fits(name) {
            tracing::warn!(field = %name, ?value, "ignoring value of the wrong kind");
            return;
        }
        self.values.set(name, value);
        self.revalidate(name);
    }

    /// Mark a field touched and refresh its error for the current value
    pub fn set_touched(&mut self, name: FieldName) {
        if self.touched.insert(name) {
            tracing::debug!(field = %name, "field touched");
        }
        self.revalidate(name);
    }

    /// Attempt a submit. All fields are marked touched before validating,
    /// so a rejected submit surfaces every error at once.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            tracing::debug!("submit ignored while a submission is in flight");
            return SubmitOutcome::Busy;
        }

        self.submit_count += 1;
        self.touched.extend(self.schema.fields());
        self.errors = self.schema.validate(&self.values);

        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "submit rejected");
            return SubmitOutcome::Rejected(self.errors.clone());
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.submission = SubmissionState::Submitting { ticket };
        tracing::info!(ticket, "submission started");

        SubmitOutcome::Started(Submission {
            ticket,
            values: self.values.clone(),
        })
    }

    /// Report that the handler for `ticket` finished.
    /// Returns false when the ticket is stale and nothing changed.
    pub fn finish_submission(&mut self, ticket: u64) -> bool {
        match self.submission {
            SubmissionState::Submitting { ticket: current } if current == ticket => {
                self.submission = SubmissionState::Idle;
                tracing::info!(ticket, "submission finished");
                true
            }
            _ => {
                tracing::debug!(ticket, "ignoring stale submission completion");
                false
            }
        }
    }

    /// Restore initial values and clear touched, errors and submission state
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.touched.clear();
        self.errors.clear();
        self.submission = SubmissionState::Idle;
        self.submit_count = 0;
        tracing::debug!("form reset");
    }

    fn revalidate(&mut self, name: FieldName) {
        match self.schema.validate_field(name, &self.values) {
            Some(message) => {
                self.errors.insert(name, message);
            }
            None => {
                self.errors.remove(&name);
            }
        }
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::signup()
    }
}
