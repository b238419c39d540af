// Declarative field validation.
//
// Request DTOs describe their constraints as a table of field descriptors;
// `evaluate` walks the table and returns one violation per violated rule,
// never short-circuiting.

pub mod extract;

pub use extract::ValidJson;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

// Accepted phone formats: "0902345345", "090-234-4567" (also '.' or space
// separators), "090-234-4567 ext1234" and "(090)-234-4567".
static PHONE_PLAIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").expect("phone pattern"));
static PHONE_SEPARATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}[-.\s]\d{3}[-.\s]\d{4}$").expect("phone pattern"));
static PHONE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}\s(?:x|ext)\d{3,5}$").expect("phone pattern"));
static PHONE_AREA_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\d{3}\)-\d{3}-\d{4}$").expect("phone pattern"));

/// Types that validate themselves against their declared constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<Violation>>;
}

/// One violated constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A single validation rule applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Value must be present.
    NotNull,
    /// Text must be present and contain non-whitespace characters.
    NotBlank,
    /// List must be present and non-empty.
    NotEmpty,
    /// Absent passes; present text must look like `local@domain.tld`.
    Email,
    /// Must be present and match one of the accepted phone formats.
    Phone,
    /// Absent passes; present number must be >= the bound.
    Min(i64),
}

/// Borrowed view of a DTO field; `None` models an absent JSON member.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Date(Option<NaiveDate>),
    List(Option<&'a [String]>),
    Number(Option<i64>),
}

impl FieldValue<'_> {
    fn is_absent(&self) -> bool {
        matches!(
            self,
            FieldValue::Text(None)
                | FieldValue::Date(None)
                | FieldValue::List(None)
                | FieldValue::Number(None)
        )
    }
}

/// Constraint descriptor: a field, its current value and the rules it must
/// satisfy, each paired with the message reported on violation.
#[derive(Debug, Clone, Copy)]
pub struct FieldConstraint<'a> {
    pub field: &'static str,
    pub value: FieldValue<'a>,
    pub rules: &'a [(Rule, &'static str)],
}

/// Evaluates every rule of every descriptor, collecting all violations.
pub fn evaluate(constraints: &[FieldConstraint]) -> Vec<Violation> {
    let mut violations: Vec<Violation> = Vec::new();

    for constraint in constraints {
        for (rule, message) in constraint.rules {
            if !satisfies(constraint.value, *rule) {
                violations.push(Violation::new(constraint.field, *message));
            }
        }
    }

    violations
}

/// Checks a required numeric parameter against a lower bound, mirroring
/// `Rule::Min` for path and query values that are always present.
pub fn check_min(field: &'static str, value: i64, min: i64) -> Option<Violation> {
    (value < min)
        .then(|| Violation::new(field, format!("must be greater than or equal to {min}")))
}

fn satisfies(value: FieldValue, rule: Rule) -> bool {
    match rule {
        Rule::NotNull => !value.is_absent(),
        Rule::NotBlank => matches!(value, FieldValue::Text(Some(s)) if !s.trim().is_empty()),
        Rule::NotEmpty => matches!(value, FieldValue::List(Some(items)) if !items.is_empty()),
        Rule::Email => match value {
            FieldValue::Text(Some(s)) => EMAIL.is_match(s),
            FieldValue::Text(None) => true,
            _ => false,
        },
        Rule::Phone => matches!(value, FieldValue::Text(Some(s)) if is_valid_phone(s)),
        Rule::Min(min) => match value {
            FieldValue::Number(Some(v)) => v >= min,
            FieldValue::Number(None) => true,
            _ => false,
        },
    }
}

fn is_valid_phone(candidate: &str) -> bool {
    PHONE_PLAIN.is_match(candidate)
        || PHONE_SEPARATED.is_match(candidate)
        || PHONE_EXTENSION.is_match(candidate)
        || PHONE_AREA_CODE.is_match(candidate)
}
