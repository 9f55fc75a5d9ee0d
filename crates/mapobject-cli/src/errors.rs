use mapobject_core::MapError;
use thiserror::Error;

/// Errores de la CLI. Cada variante tiene su código de salida.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Entrada inválida: {0}")]
    Map(#[from] MapError),
    #[error("Error de configuración: {0}")]
    Config(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Json(e) if e.is_io() => 3,
            CliError::Json(_) | CliError::Map(_) => 2,
            CliError::Io(_) => 3,
            CliError::Config(_) => 4,
        }
    }
}
