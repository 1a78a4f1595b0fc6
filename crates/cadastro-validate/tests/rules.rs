//! Unit tests for rule dispatch.

use cadastro_validate::{FieldValue, Rule};

#[test]
fn required_fails_on_absent_text() {
    let rule = Rule::Required;
    assert_eq!(
        rule.apply("RA", &FieldValue::Text(None)),
        Some("RA é obrigatório.".to_string())
    );
    assert_eq!(rule.apply("RA", &FieldValue::Text(Some("RA123456"))), None);
}

#[test]
fn required_fails_on_whitespace_text() {
    let rule = Rule::Required;
    assert_eq!(
        rule.apply("nome", &FieldValue::Text(Some("   "))),
        Some("nome é obrigatório.".to_string())
    );
}

#[test]
fn required_fails_on_absent_numbers() {
    let rule = Rule::Required;
    assert!(rule.apply("preco", &FieldValue::Decimal(None)).is_some());
    assert!(rule.apply("estoque", &FieldValue::Integer(None)).is_some());
    assert_eq!(rule.apply("preco", &FieldValue::Decimal(Some(1.0))), None);
    assert_eq!(rule.apply("estoque", &FieldValue::Integer(Some(0))), None);
}

#[test]
fn bounded_length_checks_char_count() {
    let rule = Rule::BoundedLength { min: 3, max: 100 };
    assert_eq!(
        rule.apply("nome", &FieldValue::Text(Some("Jo"))),
        Some("nome deve ter entre 3 e 100 caracteres.".to_string())
    );
    assert_eq!(rule.apply("nome", &FieldValue::Text(Some("Ana"))), None);
    // Multibyte chars count as one
    assert_eq!(rule.apply("nome", &FieldValue::Text(Some("Zoé"))), None);
    let long = "a".repeat(101);
    assert!(rule.apply("nome", &FieldValue::Text(Some(&long))).is_some());
}

#[test]
fn bounded_length_passes_on_absent_value() {
    // Presence is the required rule's concern
    let rule = Rule::BoundedLength { min: 3, max: 100 };
    assert_eq!(rule.apply("nome", &FieldValue::Text(None)), None);
}

#[test]
fn exact_length_message_names_the_count() {
    let rule = Rule::ExactLength { len: 8 };
    assert_eq!(
        rule.apply("codigoProduto", &FieldValue::Text(Some("ABC-123"))),
        Some("codigoProduto deve ter exatamente 8 caracteres.".to_string())
    );
    assert_eq!(
        rule.apply("codigoProduto", &FieldValue::Text(Some("ABC-1234"))),
        None
    );
}

#[test]
fn numeric_range_checks_minimum() {
    let rule = Rule::NumericRange {
        min: 0.01,
        message: "Preço deve ser maior que zero.",
    };
    assert_eq!(
        rule.apply("preco", &FieldValue::Decimal(Some(0.0))),
        Some("Preço deve ser maior que zero.".to_string())
    );
    assert_eq!(rule.apply("preco", &FieldValue::Decimal(Some(0.01))), None);

    let rule = Rule::NumericRange {
        min: 0.0,
        message: "Estoque não pode ser negativo.",
    };
    assert!(rule.apply("estoque", &FieldValue::Integer(Some(-1))).is_some());
    assert_eq!(rule.apply("estoque", &FieldValue::Integer(Some(0))), None);
}

#[test]
fn checksum_rule_delegates_to_cpf() {
    let rule = Rule::Checksum;
    assert_eq!(rule.apply("CPF", &FieldValue::Text(Some("52998224725"))), None);
    assert_eq!(
        rule.apply("CPF", &FieldValue::Text(Some("123"))),
        Some("CPF inválido. Deve conter 11 dígitos.".to_string())
    );
}
