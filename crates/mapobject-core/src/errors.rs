//! Errores del core. Sólo aparecen cuando la entrada no tiene forma de mapping
//! o cuando un registro tipado no se puede serializar.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum MapError {
    #[error("input is not an object (found {found})")]
    NotAnObject { found: String },
    #[error("serialize: {0}")]
    Serialize(String),
}

/// Nombre corto del tipo JSON, usado en los mensajes de error.
pub(crate) fn kind_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
