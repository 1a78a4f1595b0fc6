//! Validator aggregation.
//!
//! `FieldValidator` binds one named field to an ordered rule chain;
//! `RecordValidator` runs every field validator for a record type and
//! collects the failures into a `ValidationResult`. Both are immutable
//! after construction and hold no per-call state, so one instance serves
//! any number of concurrent callers.

use cadastro_model::{ValidationError, ValidationResult};

use crate::rules::{FieldValue, Rule};

/// Reads one field out of a record.
pub type Accessor<R> = for<'a> fn(&'a R) -> FieldValue<'a>;

/// An ordered rule chain bound to one record field.
#[derive(Debug)]
pub struct FieldValidator {
    /// Error-map key (JSON field name).
    name: &'static str,
    /// Caller-facing name used inside messages.
    label: &'static str,
    rules: Vec<Rule>,
}

impl FieldValidator {
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            rules: Vec::new(),
        }
    }

    /// Append a rule to the chain. Order matters: the first failure wins.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the rule chain against a field value.
    ///
    /// Rules run in declaration order and the first failure is reported,
    /// so a required failure is never doubled up with a format message for
    /// the same absent value. Yields zero or one error per field.
    pub fn check(&self, value: &FieldValue<'_>) -> Option<ValidationError> {
        for rule in &self.rules {
            if let Some(message) = rule.apply(self.label, value) {
                return Some(ValidationError::new(self.name, message));
            }
        }
        None
    }
}

/// Ordered set of field validators for one record type.
#[derive(Debug)]
pub struct RecordValidator<R> {
    fields: Vec<(FieldValidator, Accessor<R>)>,
}

impl<R> RecordValidator<R> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Register a field validator with the accessor that reads its value.
    /// Registration order is the error-map order.
    pub fn field(mut self, validator: FieldValidator, accessor: Accessor<R>) -> Self {
        self.fields.push((validator, accessor));
        self
    }

    /// Validate a record.
    ///
    /// Every field is evaluated even when earlier fields fail, so a single
    /// call reports all violated fields at once.
    pub fn validate(&self, record: &R) -> ValidationResult {
        let mut errors = Vec::new();
        for (validator, accessor) in &self.fields {
            let value = accessor(record);
            if let Some(error) = validator.check(&value) {
                errors.push(error);
            }
        }
        ValidationResult::from_errors(errors)
    }
}

impl<R> Default for RecordValidator<R> {
    fn default() -> Self {
        Self::new()
    }
}
