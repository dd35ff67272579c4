//! Form field value objects

use std::fmt;

/// The named fields of the signup form, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    JobType,
    AcceptedTerms,
}

impl FieldName {
    /// Every field, in the order the form presents them
    pub const ALL: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::JobType,
        FieldName::AcceptedTerms,
    ];

    /// Key used for this field in submitted values and logs
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::JobType => "jobType",
            Self::AcceptedTerms => "acceptedTerms",
        }
    }

    /// Whether the field holds a boolean rather than text
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::AcceptedTerms)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for boolean fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Bool(_) => "",
        }
    }

    /// Get the boolean value (returns false for text fields)
    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    /// Whether this value has the shape the given field expects
    pub fn fits(&self, name: FieldName) -> bool {
        matches!(self, FieldValue::Bool(_)) == name.is_boolean()
    }
}

/// Derived per-field state exposed to presenters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: FieldValue,
    pub touched: bool,
    pub error: Option<String>,
}

/// Read access to one field: what presenters draw from
pub trait FieldView {
    fn value(&self) -> FieldValue;
    fn error(&self) -> Option<&str>;
    fn touched(&self) -> bool;

    /// The message a presenter should show, if any.
    /// Errors stay hidden until the field has been touched.
    fn visible_error(&self) -> Option<&str> {
        if self.touched() {
            self.error()
        } else {
            None
        }
    }
}

impl FieldView for FieldState {
    fn value(&self) -> FieldValue {
        self.value.clone()
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn touched(&self) -> bool {
        self.touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_camel_case() {
        let keys: Vec<&str> = FieldName::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec!["firstName", "lastName", "email", "jobType", "acceptedTerms"]
        );
    }

    #[test]
    fn test_only_accepted_terms_is_boolean() {
        for name in FieldName::ALL {
            assert_eq!(name.is_boolean(), name == FieldName::AcceptedTerms);
        }
    }

    #[test]
    fn test_value_fits_field_kind() {
        assert!(FieldValue::Text("a".into()).fits(FieldName::Email));
        assert!(!FieldValue::Bool(true).fits(FieldName::Email));
        assert!(FieldValue::Bool(true).fits(FieldName::AcceptedTerms));
        assert!(!FieldValue::Text(String::new()).fits(FieldName::AcceptedTerms));
    }

    #[test]
    fn test_cross_kind_accessors_fall_back() {
        assert_eq!(FieldValue::Bool(true).as_text(), "");
        assert!(!FieldValue::Text("true".into()).as_bool());
    }

    #[test]
    fn test_error_hidden_until_touched() {
        let mut state = FieldState {
            value: FieldValue::default(),
            touched: false,
            error: Some("Required".to_string()),
        };
        assert_eq!(state.visible_error(), None);
        state.touched = true;
        assert_eq!(state.visible_error(), Some("Required"));
    }
}
