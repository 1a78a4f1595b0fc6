pub mod record;
pub mod result;

pub use record::{Product, Student};
pub use result::{ValidationError, ValidationResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_groups_messages_per_field() {
        let result = ValidationResult::from_errors(vec![
            ValidationError::new("ra", "RA é obrigatório."),
            ValidationError::new("cpf", "CPF inválido."),
        ]);
        assert!(!result.is_valid());
        assert_eq!(result.error_field_count(), 2);
        assert_eq!(
            result.messages("ra"),
            Some(&["RA é obrigatório.".to_string()][..])
        );
        assert_eq!(result.messages("nome"), None);
    }

    #[test]
    fn result_keeps_field_order() {
        let result = ValidationResult::from_errors(vec![
            ValidationError::new("nome", "a"),
            ValidationError::new("ra", "b"),
            ValidationError::new("nome", "c"),
        ]);
        let fields: Vec<&str> = result.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["nome", "ra"]);
        assert_eq!(result.messages("nome").unwrap().len(), 2);
    }

    #[test]
    fn empty_result_is_valid() {
        let result = ValidationResult::from_errors(vec![]);
        assert!(result.is_valid());
        assert_eq!(result.error_field_count(), 0);
    }

    #[test]
    fn result_serializes_to_envelope_shape() {
        let result = ValidationResult::from_errors(vec![ValidationError::new(
            "codigoProduto",
            "codigoProduto deve ter exatamente 8 caracteres.",
        )]);
        let json = serde_json::to_value(&result).expect("serialize result");
        assert_eq!(json["valid"], serde_json::Value::Bool(false));
        assert_eq!(
            json["errors"]["codigoProduto"][0],
            "codigoProduto deve ter exatamente 8 caracteres."
        );
    }

    #[test]
    fn student_deserializes_with_default_ativo() {
        let student: Student =
            serde_json::from_str(r#"{"nome":"Ana Silva","ra":"RA123456","email":"ana@example.com","cpf":"52998224725"}"#)
                .expect("deserialize student");
        assert!(student.ativo);
        assert_eq!(student.ra.as_deref(), Some("RA123456"));
    }

    #[test]
    fn product_deserializes_camel_case_code() {
        let product: Product = serde_json::from_str(
            r#"{"descricao":"Teclado mecânico","preco":199.9,"estoque":10,"codigoProduto":"ABC-1234"}"#,
        )
        .expect("deserialize product");
        assert_eq!(product.codigo_produto.as_deref(), Some("ABC-1234"));
        assert_eq!(product.estoque, Some(10));
    }

    #[test]
    fn absent_fields_deserialize_as_none() {
        let product: Product = serde_json::from_str(r#"{"preco":null}"#).expect("deserialize");
        assert_eq!(product.descricao, None);
        assert_eq!(product.preco, None);
        assert_eq!(product.codigo_produto, None);
    }
}
