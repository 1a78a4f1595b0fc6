//! Field-level validation engine for cadastro records.
//!
//! Checks are `Rule` variants bound to named fields by `FieldValidator`;
//! a `RecordValidator` runs every field independently and aggregates the
//! failures into a `ValidationResult`. Validators are built once and are
//! safe to share across threads.

pub mod cpf;
mod engine;
pub mod product;
pub mod rules;
pub mod student;

pub use engine::{Accessor, FieldValidator, RecordValidator};
pub use rules::{FieldValue, Rule};

use cadastro_model::{Product, Student, ValidationResult};

/// Validate a student record.
pub fn validate_student(record: &Student) -> ValidationResult {
    student::validate(record)
}

/// Validate a product record.
pub fn validate_product(record: &Product) -> ValidationResult {
    product::validate(record)
}
