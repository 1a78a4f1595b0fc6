//! Validator for product records.

use std::sync::LazyLock;

use cadastro_model::{Product, ValidationResult};
use regex::Regex;

use crate::engine::{FieldValidator, RecordValidator};
use crate::rules::{FieldValue, Rule};

/// Reported when the product code has 8 chars but the wrong shape.
pub const MSG_CODIGO_FORMAT: &str =
    "codigoProduto inválido. Formato esperado: 'AAA-1234' (3 letras maiúsculas, hífen, 4 números).";

/// Reported when the price is below one cent.
pub const MSG_PRECO_RANGE: &str = "Preço deve ser maior que zero.";

/// Reported for negative stock counts.
pub const MSG_ESTOQUE_RANGE: &str = "Estoque não pode ser negativo.";

static CODIGO_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}-\d{4}$").expect("invalid product code regex"));

static VALIDATOR: LazyLock<RecordValidator<Product>> = LazyLock::new(build);

/// Validate a product record against all field rules.
pub fn validate(record: &Product) -> ValidationResult {
    VALIDATOR.validate(record)
}

fn build() -> RecordValidator<Product> {
    RecordValidator::new()
        .field(
            FieldValidator::new("descricao", "descricao")
                .rule(Rule::Required)
                .rule(Rule::BoundedLength { min: 3, max: 200 }),
            |record: &Product| FieldValue::Text(record.descricao.as_deref()),
        )
        .field(
            FieldValidator::new("preco", "preco")
                .rule(Rule::Required)
                .rule(Rule::NumericRange {
                    min: 0.01,
                    message: MSG_PRECO_RANGE,
                }),
            |record: &Product| FieldValue::Decimal(record.preco),
        )
        .field(
            FieldValidator::new("estoque", "estoque")
                .rule(Rule::Required)
                .rule(Rule::NumericRange {
                    min: 0.0,
                    message: MSG_ESTOQUE_RANGE,
                }),
            |record: &Product| FieldValue::Integer(record.estoque),
        )
        .field(
            // The 8-char length rule runs before the pattern rule: both
            // are stated independently, and the length message must win
            // when the length is wrong.
            FieldValidator::new("codigoProduto", "codigoProduto")
                .rule(Rule::Required)
                .rule(Rule::ExactLength { len: 8 })
                .rule(Rule::Pattern {
                    regex: &CODIGO_REGEX,
                    message: MSG_CODIGO_FORMAT,
                }),
            |record: &Product| FieldValue::Text(record.codigo_produto.as_deref()),
        )
}
