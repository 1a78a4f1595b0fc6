//! Validator for student records.

use std::sync::LazyLock;

use cadastro_model::{Student, ValidationResult};
use regex::Regex;

use crate::engine::{FieldValidator, RecordValidator};
use crate::rules::{FieldValue, Rule};

/// Reported when the RA does not match "RA" followed by 6 digits.
pub const MSG_RA_FORMAT: &str =
    "RA inválido. Formato esperado: 'RA' seguido de 6 dígitos (ex: RA123456).";

/// Reported when the email does not look like an address.
pub const MSG_EMAIL_FORMAT: &str = "email inválido. Formato esperado: 'nome@dominio.com'.";

static RA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^RA\d{6}$").expect("invalid RA regex"));

// Pragmatic RFC 5322 subset: one @, no whitespace, dotted domain.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

static VALIDATOR: LazyLock<RecordValidator<Student>> = LazyLock::new(build);

/// Validate a student record against all field rules.
pub fn validate(record: &Student) -> ValidationResult {
    VALIDATOR.validate(record)
}

fn build() -> RecordValidator<Student> {
    RecordValidator::new()
        .field(
            FieldValidator::new("nome", "nome")
                .rule(Rule::Required)
                .rule(Rule::BoundedLength { min: 3, max: 100 }),
            |record: &Student| FieldValue::Text(record.nome.as_deref()),
        )
        .field(
            FieldValidator::new("ra", "RA")
                .rule(Rule::Required)
                .rule(Rule::Pattern {
                    regex: &RA_REGEX,
                    message: MSG_RA_FORMAT,
                }),
            |record: &Student| FieldValue::Text(record.ra.as_deref()),
        )
        .field(
            FieldValidator::new("email", "email")
                .rule(Rule::Required)
                .rule(Rule::Pattern {
                    regex: &EMAIL_REGEX,
                    message: MSG_EMAIL_FORMAT,
                }),
            |record: &Student| FieldValue::Text(record.email.as_deref()),
        )
        .field(
            FieldValidator::new("cpf", "CPF")
                .rule(Rule::Required)
                .rule(Rule::Checksum),
            |record: &Student| FieldValue::Text(record.cpf.as_deref()),
        )
}
