//! Validation outcome types.
//!
//! `ValidationResult` is the immutable value returned from every validation
//! call: a validity flag plus field-name → message(s), in field declaration
//! order. It replaces the ambient mutable error bag of framework-driven
//! validation with an explicit return value.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A single field-level validation failure.
///
/// Never fatal: malformed input is the expected failure mode, represented
/// as data in the result rather than a thrown condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Error-map key (JSON field name, e.g. "codigoProduto").
    pub field: String,
    /// Human-readable message in the caller-facing wording.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Aggregated outcome of validating one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<(String, Vec<String>)>,
}

impl ValidationResult {
    /// Build a result from collected field errors, grouping messages under
    /// their field in first-seen order.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
        for error in errors {
            match grouped.iter_mut().find(|(field, _)| *field == error.field) {
                Some((_, messages)) => messages.push(error.message),
                None => grouped.push((error.field, vec![error.message])),
            }
        }
        Self {
            valid: grouped.is_empty(),
            errors: grouped,
        }
    }

    /// True iff no field produced an error.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Number of fields with at least one error.
    pub fn error_field_count(&self) -> usize {
        self.errors.len()
    }

    /// Messages recorded for a field, if any.
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Field/messages pairs in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

// Serialized shape consumed by transport layers:
// {"valid": bool, "errors": {"<field>": ["<message>", ...]}}
// The errors map keeps field declaration order, so it is emitted from the
// ordered pairs rather than a sorted map.
impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct ErrorMap<'a>(&'a [(String, Vec<String>)]);

        impl Serialize for ErrorMap<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (field, messages) in self.0 {
                    map.serialize_entry(field, messages)?;
                }
                map.end()
            }
        }

        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("valid", &self.valid)?;
        state.serialize_field("errors", &ErrorMap(&self.errors))?;
        state.end()
    }
}
