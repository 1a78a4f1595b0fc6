use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use tracing::debug;

use cadastro_model::{Product, Student, ValidationResult};
use cadastro_validate::{validate_product, validate_student};

use crate::cli::RecordArgs;

/// Outcome of one validation run: what was validated and its result.
pub struct Outcome {
    pub kind: &'static str,
    pub result: ValidationResult,
}

pub fn run_student(args: &RecordArgs) -> Result<Outcome> {
    let payload = read_payload(args)?;
    let record: Student = serde_json::from_str(&payload).context("parse student record")?;
    let result = validate_student(&record);
    debug!(
        valid = result.is_valid(),
        fields = result.error_field_count(),
        "student record validated"
    );
    Ok(Outcome {
        kind: "aluno",
        result,
    })
}

pub fn run_product(args: &RecordArgs) -> Result<Outcome> {
    let payload = read_payload(args)?;
    let record: Product = serde_json::from_str(&payload).context("parse product record")?;
    let result = validate_product(&record);
    debug!(
        valid = result.is_valid(),
        fields = result.error_field_count(),
        "product record validated"
    );
    Ok(Outcome {
        kind: "produto",
        result,
    })
}

fn read_payload(args: &RecordArgs) -> Result<String> {
    match &args.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("read record from stdin")?;
            Ok(buffer)
        }
    }
}
