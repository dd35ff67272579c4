//! Signup form values

use super::field::{FieldName, FieldValue};
use serde::{Deserialize, Serialize};

/// Job types the select offers, as (value, display label).
/// The empty value is the "nothing chosen yet" placeholder.
pub const JOB_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("", "Select a job type"),
    ("designer", "Designer"),
    ("development", "Developer"),
    ("product", "Product Manager"),
    ("other", "Other"),
];

/// The full value set of the signup form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub accepted_terms: bool,
    pub job_type: String,
}

impl FormValues {
    /// Read one field as a `FieldValue`
    pub fn get(&self, name: FieldName) -> FieldValue {
        match name {
            FieldName::FirstName => FieldValue::Text(self.first_name.clone()),
            FieldName::LastName => FieldValue::Text(self.last_name.clone()),
            FieldName::Email => FieldValue::Text(self.email.clone()),
            FieldName::JobType => FieldValue::Text(self.job_type.clone()),
            FieldName::AcceptedTerms => FieldValue::Bool(self.accepted_terms),
        }
    }

    /// Write one field. Returns false (and leaves the values alone)
    /// when the value kind does not match the field.
    pub fn set(&mut self, name: FieldName, value: FieldValue) -> bool {
        match (name, value) {
            (FieldName::FirstName, FieldValue::Text(s)) => self.first_name = s,
            (FieldName::LastName, FieldValue::Text(s)) => self.last_name = s,
            (FieldName::Email, FieldValue::Text(s)) => self.email = s,
            (FieldName::JobType, FieldValue::Text(s)) => self.job_type = s,
            (FieldName::AcceptedTerms, FieldValue::Bool(b)) => self.accepted_terms = b,
            _ => return false,
        }
        true
    }

    /// Pretty JSON rendering used when surfacing a submission
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
