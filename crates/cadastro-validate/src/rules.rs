//! Field-level validation rules.
//!
//! Each check kind is a `Rule` variant carrying only its needed data,
//! dispatched by a single `apply` function. Rules are pure: same value,
//! same outcome, no side effects.

use regex::Regex;

use crate::cpf;

/// Value of one record field as seen by the rules.
///
/// Each variant wraps an `Option` so absent input fails its own rule
/// instead of faulting the engine.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Decimal(Option<f64>),
    Integer(Option<i64>),
}

/// A single reusable field check.
#[derive(Debug)]
pub enum Rule {
    /// Value must be present; text must not be all-whitespace.
    Required,
    /// Char count must fall within `[min, max]`.
    BoundedLength { min: usize, max: usize },
    /// Char count must be exactly `len`.
    ExactLength { len: usize },
    /// Text must fully match `regex`.
    Pattern {
        regex: &'static Regex,
        message: &'static str,
    },
    /// CPF check digit validation.
    Checksum,
    /// Numeric value must be at least `min`.
    NumericRange { min: f64, message: &'static str },
}

impl Rule {
    /// Run the check against a field value.
    ///
    /// `label` is the field's caller-facing name used in messages (e.g.
    /// "RA"), which may differ from the error-map key ("ra"). Returns
    /// `None` when the check passes. Non-required rules pass on absent
    /// values; presence is the required rule's concern.
    pub fn apply(&self, label: &str, value: &FieldValue<'_>) -> Option<String> {
        match self {
            Rule::Required => {
                if is_present(value) {
                    None
                } else {
                    Some(format!("{label} é obrigatório."))
                }
            }
            Rule::BoundedLength { min, max } => {
                let text = text_value(value)?;
                let count = text.chars().count();
                if count < *min || count > *max {
                    Some(format!("{label} deve ter entre {min} e {max} caracteres."))
                } else {
                    None
                }
            }
            Rule::ExactLength { len } => {
                let text = text_value(value)?;
                if text.chars().count() != *len {
                    Some(format!("{label} deve ter exatamente {len} caracteres."))
                } else {
                    None
                }
            }
            Rule::Pattern { regex, message } => {
                let text = text_value(value)?;
                if regex.is_match(text) {
                    None
                } else {
                    Some((*message).to_string())
                }
            }
            Rule::Checksum => {
                let text = text_value(value)?;
                cpf::check(text).map(String::from)
            }
            Rule::NumericRange { min, message } => {
                let number = numeric_value(value)?;
                if number < *min {
                    Some((*message).to_string())
                } else {
                    None
                }
            }
        }
    }
}

fn is_present(value: &FieldValue<'_>) -> bool {
    match value {
        FieldValue::Text(text) => text.is_some_and(|s| !s.trim().is_empty()),
        FieldValue::Decimal(number) => number.is_some(),
        FieldValue::Integer(number) => number.is_some(),
    }
}

fn text_value<'a>(value: &FieldValue<'a>) -> Option<&'a str> {
    match value {
        FieldValue::Text(text) => *text,
        _ => None,
    }
}

fn numeric_value(value: &FieldValue<'_>) -> Option<f64> {
    match value {
        FieldValue::Decimal(number) => *number,
        FieldValue::Integer(number) => number.map(|n| n as f64),
        FieldValue::Text(_) => None,
    }
}
