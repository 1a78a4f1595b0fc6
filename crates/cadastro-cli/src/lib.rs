//! CLI library components for the cadastro validator.

pub mod logging;
