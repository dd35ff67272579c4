//! Form domain layer
//!
//! Values, schema, controller and focus state for the signup form.
//! Nothing in here knows about the terminal.

mod binding;
mod controller;
mod field;
mod form_state;
mod schema;
mod values;

pub use binding::FieldBinding;
pub use controller::{FormController, Submission, SubmissionState, SubmitOutcome};
pub use field::{FieldName, FieldState, FieldValue, FieldView};
pub use form_state::{Form, FormButton, SignupForm};
pub use schema::ValidationSchema;
pub use values::{FormValues, JOB_TYPE_OPTIONS};
