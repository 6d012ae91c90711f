//! Declarative field schemas used to validate request bodies.
//!
//! Every entity declares its client-writable fields as a static slice of
//! [`FieldSpec`]. Bodies are checked against that slice before they are
//! merged into a stored record, so type errors surface as field-level
//! validation errors instead of opaque deserialization failures.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::{ERROR_BODY_NOT_OBJECT, SERVER_OWNED_FIELDS};
use crate::utils::datetime;

/// A stored record in its wire representation
pub type Document = Map<String, Value>;

/// The JSON type a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text that must contain at least one non-whitespace character
    NonEmptyText,
    Integer,
    Number,
    Boolean,
    /// `YYYY-MM-DD`
    Date,
    /// `HH:MM`
    Time,
    /// Text restricted to a fixed set of values
    OneOf(&'static [&'static str]),
    TextList,
    /// List of `YYYY-MM-DD` dates
    DateList,
}

/// Whether a field must be supplied and whether it may be null
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Must be present and non-null on create
    Required,
    /// May be omitted or null
    Optional,
    /// May be omitted (a default is substituted) but never null
    Defaulted,
}

/// One client-writable field: its JSON name, accepted type and presence rule
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
}

impl FieldSpec {
    /// Field that must be supplied on create
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
        }
    }

    /// Field that may be omitted or null
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
        }
    }

    /// Field that may be omitted, in which case the entity default applies
    pub const fn defaulted(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Defaulted,
        }
    }
}

/// Validation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Patch,
}

/// One problem with one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All field errors found in a request body
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Error with a single field problem
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }

    /// Whether an error was reported for `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Turn a request body into a document, rejecting anything but a JSON object
pub fn into_document(body: Value) -> Result<Document, ValidationError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(ValidationError::single("body", ERROR_BODY_NOT_OBJECT)),
    }
}

/// Drop server-owned fields and fields the schema does not know about
pub fn sanitize(fields: &[FieldSpec], body: &mut Document) {
    for key in SERVER_OWNED_FIELDS {
        body.remove(key);
    }
    body.retain(|key, _| fields.iter().any(|f| f.name == key.as_str()));
}

/// Check a sanitized body against the schema, collecting every field error
pub fn validate(fields: &[FieldSpec], body: &Document, mode: Mode) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    for spec in fields {
        match body.get(spec.name) {
            None => {
                if mode == Mode::Create && spec.presence == Presence::Required {
                    errors.push(FieldError::new(spec.name, "is required"));
                }
            }
            Some(Value::Null) => {
                if spec.presence != Presence::Optional {
                    errors.push(FieldError::new(spec.name, "cannot be null"));
                }
            }
            Some(value) => {
                if let Err(message) = check_kind(spec.kind, value) {
                    errors.push(FieldError::new(spec.name, message));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { errors })
    }
}

fn check_kind(kind: FieldKind, value: &Value) -> Result<(), String> {
    match kind {
        FieldKind::Text => value.as_str().map(|_| ()).ok_or_else(|| "must be a string".to_string()),
        FieldKind::NonEmptyText => match value.as_str() {
            Some(s) if !s.trim().is_empty() => Ok(()),
            Some(_) => Err("cannot be empty".to_string()),
            None => Err("must be a string".to_string()),
        },
        FieldKind::Integer => value
            .as_i64()
            .map(|_| ())
            .ok_or_else(|| "must be an integer".to_string()),
        FieldKind::Number => {
            if value.is_number() {
                Ok(())
            } else {
                Err("must be a number".to_string())
            }
        }
        FieldKind::Boolean => value
            .as_bool()
            .map(|_| ())
            .ok_or_else(|| "must be a boolean".to_string()),
        FieldKind::Date => match value.as_str() {
            Some(s) if datetime::is_valid_date(s) => Ok(()),
            _ => Err("must be a date in YYYY-MM-DD format".to_string()),
        },
        FieldKind::Time => match value.as_str() {
            Some(s) if datetime::is_valid_time(s) => Ok(()),
            _ => Err("must be a time in HH:MM format".to_string()),
        },
        FieldKind::OneOf(allowed) => match value.as_str() {
            Some(s) if allowed.contains(&s) => Ok(()),
            _ => Err(format!("must be one of: {}", allowed.join(", "))),
        },
        FieldKind::TextList => match value.as_array() {
            Some(items) if items.iter().all(Value::is_string) => Ok(()),
            _ => Err("must be a list of strings".to_string()),
        },
        FieldKind::DateList => match value.as_array() {
            Some(items) if items.iter().all(|v| v.as_str().is_some_and(datetime::is_valid_date)) => Ok(()),
            _ => Err("must be a list of dates in YYYY-MM-DD format".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("title", FieldKind::NonEmptyText),
        FieldSpec::defaulted("count", FieldKind::Integer),
        FieldSpec::optional("due", FieldKind::Date),
        FieldSpec::defaulted("tags", FieldKind::TextList),
        FieldSpec::optional("level", FieldKind::OneOf(&["low", "high"])),
    ];

    fn doc(value: Value) -> Document {
        into_document(value).unwrap()
    }

    #[test]
    fn missing_required_field_is_reported_on_create_only() {
        let body = doc(json!({ "count": 2 }));
        let err = validate(FIELDS, &body, Mode::Create).unwrap_err();
        assert!(err.has_field("title"));
        assert!(validate(FIELDS, &body, Mode::Patch).is_ok());
    }

    #[test]
    fn collects_every_field_error() {
        let body = doc(json!({
            "title": "  ",
            "count": 1.5,
            "due": "tomorrow",
            "tags": [1],
            "level": "medium"
        }));
        let err = validate(FIELDS, &body, Mode::Create).unwrap_err();
        assert_eq!(err.errors.len(), 5);
    }

    #[test]
    fn null_only_allowed_on_optional_fields() {
        let body = doc(json!({ "due": null }));
        assert!(validate(FIELDS, &body, Mode::Patch).is_ok());

        let body = doc(json!({ "count": null }));
        let err = validate(FIELDS, &body, Mode::Patch).unwrap_err();
        assert_eq!(err.errors, vec![FieldError::new("count", "cannot be null")]);
    }

    #[test]
    fn sanitize_strips_server_and_unknown_fields() {
        let mut body = doc(json!({
            "id": "client-id",
            "userId": "someone-else",
            "createdAt": "2020-01-01T00:00:00Z",
            "title": "ok",
            "bogus": true
        }));
        sanitize(FIELDS, &mut body);
        assert_eq!(body.len(), 1);
        assert!(body.contains_key("title"));
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = into_document(json!([1, 2, 3])).unwrap_err();
        assert!(err.has_field("body"));
    }
}
