//! Declarative validation schema for the signup form

use super::field::{FieldName, FieldValue};
use super::values::FormValues;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Field -> message for every field that currently fails validation
pub type FormErrors = BTreeMap<FieldName, String>;

/// Job type values accepted by the schema
pub const VALID_JOB_TYPES: &[&str] = &["designer", "development", "product", "other"];

/// Dot-atom local part, then a domain of at least two dot-separated labels.
/// Letters and digits may be any Unicode letter or number.
const EMAIL_PATTERN: &str = concat!(
    r"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*",
    r"@[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?",
    r"(?:\.[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?)+$",
);

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// A single check applied to a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Text must be non-empty
    Required,
    /// Text must be at most this many characters
    MaxLength(usize),
    /// Text must look like an email address
    Email,
    /// Text must be one of the listed values
    OneOf(&'static [&'static str]),
    /// Boolean must be true
    IsTrue,
}

impl Constraint {
    /// Whether the value satisfies this constraint
    pub fn check(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Constraint::Required, FieldValue::Text(s)) => !s.is_empty(),
            (Constraint::MaxLength(max), FieldValue::Text(s)) => s.chars().count() <= *max,
            (Constraint::Email, FieldValue::Text(s)) => email_regex().is_match(s),
            (Constraint::OneOf(allowed), FieldValue::Text(s)) => allowed.contains(&s.as_str()),
            (Constraint::IsTrue, FieldValue::Bool(b)) => *b,
            // A constraint applied to the wrong kind of value never passes
            _ => false,
        }
    }
}

/// A constraint paired with the message reported when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub constraint: Constraint,
    pub message: String,
}

impl Rule {
    pub fn new(constraint: Constraint, message: &str) -> Self {
        Self {
            constraint,
            message: message.to_string(),
        }
    }
}

/// Ordered mapping from field to its rules.
/// Rules are evaluated in order and the first failure wins.
#[derive(Debug, Clone, Default)]
pub struct ValidationSchema {
    entries: Vec<(FieldName, Vec<Rule>)>,
}

impl ValidationSchema {
    /// Start an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the rules for a field
    pub fn field(mut self, name: FieldName, rules: Vec<Rule>) -> Self {
        self.entries.retain(|(existing, _)| *existing != name);
        self.entries.push((name, rules));
        self
    }

    /// The schema backing the signup form
    pub fn signup() -> Self {
        Self::new()
            .field(
                FieldName::FirstName,
                vec![
                    Rule::new(Constraint::Required, "Required"),
                    Rule::new(Constraint::MaxLength(15), "Must be 15 characters or less"),
                ],
            )
            .field(
                FieldName::LastName,
                vec![
                    Rule::new(Constraint::Required, "Required"),
                    Rule::new(Constraint::MaxLength(20), "Must be 20 characters or less"),
                ],
            )
            .field(
                FieldName::Email,
                vec![
                    Rule::new(Constraint::Required, "Required"),
                    Rule::new(Constraint::Email, "Invalid email address"),
                ],
            )
            .field(
                FieldName::AcceptedTerms,
                vec![Rule::new(
                    Constraint::IsTrue,
                    "Accept terms and conditions is required",
                )],
            )
            .field(
                FieldName::JobType,
                vec![
                    Rule::new(Constraint::Required, "Required"),
                    Rule::new(
                        Constraint::OneOf(VALID_JOB_TYPES),
                        "Must select a valid job type",
                    ),
                ],
            )
    }

    /// Rules registered for a field
    pub fn rules_for(&self, name: FieldName) -> Option<&[Rule]> {
        self.entries
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, rules)| rules.as_slice())
    }

    /// Fields that have an entry, in registration order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Maximum length declared for a text field, if any
    pub fn max_length(&self, name: FieldName) -> Option<usize> {
        self.rules_for(name)?.iter().find_map(|rule| match rule.constraint {
            Constraint::MaxLength(max) => Some(max),
            _ => None,
        })
    }

    /// Whether the field carries a `Required` or `IsTrue` rule
    pub fn is_required(&self, name: FieldName) -> bool {
        self.rules_for(name).is_some_and(|rules| {
            rules
                .iter()
                .any(|r| matches!(r.constraint, Constraint::Required | Constraint::IsTrue))
        })
    }

    /// First failing message for one field, or `None` when it passes
    pub fn validate_field(&self, name: FieldName, values: &FormValues) -> Option<String> {
        let value = values.get(name);
        self.rules_for(name)?
            .iter()
            .find(|rule| !rule.constraint.check(&value))
            .map(|rule| rule.message.clone())
    }

    /// Every failing field with its first failing message
    pub fn validate(&self, values: &FormValues) -> FormErrors {
        self.fields()
            .filter_map(|name| self.validate_field(name, values).map(|msg| (name, msg)))
            .collect()
    }
}
