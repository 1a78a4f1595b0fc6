//! Input record types.
//!
//! All validated fields are `Option`-typed so a missing or null JSON field
//! reaches the validation engine as `None` and fails its own required rule
//! instead of failing deserialization.

use serde::{Deserialize, Serialize};

/// A student registration record ("aluno").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub nome: Option<String>,
    /// Registration number, "RA" followed by 6 digits.
    pub ra: Option<String>,
    pub email: Option<String>,
    /// National ID (CPF), 11 digits with two trailing check digits.
    pub cpf: Option<String>,
    /// Not validated; carried through for callers.
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

/// A product registration record ("produto").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub descricao: Option<String>,
    pub preco: Option<f64>,
    pub estoque: Option<i64>,
    /// Product code, 3 uppercase letters, hyphen, 4 digits.
    #[serde(rename = "codigoProduto")]
    pub codigo_produto: Option<String>,
}

fn default_ativo() -> bool {
    true
}
