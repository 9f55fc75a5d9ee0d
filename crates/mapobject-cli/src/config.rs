//! Configuración de la CLI.
//! Se carga una sola vez desde variables de entorno (y `.env` si existe, ver
//! `main`). Los flags de línea de comandos tienen prioridad sobre estos valores.
use once_cell::sync::Lazy;
use std::env;

use crate::errors::CliError;

pub const KEY_NAME_VAR: &str = "MAPOBJECT_KEY_NAME";
pub const PRETTY_VAR: &str = "MAPOBJECT_PRETTY";

/// Valores por defecto de la CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Nombre de campo para la clave cuando no se pasa `--key-name`.
    pub key_name: Option<String>,
    /// Salida indentada por defecto.
    pub pretty: bool,
}

impl CliConfig {
    /// Construye la configuración a partir de una función de búsqueda, para
    /// poder probarla sin tocar el entorno del proceso.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key_name = match lookup(KEY_NAME_VAR) {
            Some(v) if v.is_empty() => return Err(format!("{KEY_NAME_VAR} está definido pero vacío")),
            other => other,
        };
        let pretty = match lookup(PRETTY_VAR) {
            None => false,
            Some(v) => parse_flag(&v).ok_or_else(|| format!("{PRETTY_VAR} no es un booleano: {v}"))?,
        };
        Ok(Self { key_name, pretty })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Instancia global perezosa, evaluada una sola vez.
pub static CONFIG: Lazy<Result<CliConfig, String>> = Lazy::new(|| CliConfig::from_lookup(|name| env::var(name).ok()));

pub fn current() -> Result<&'static CliConfig, CliError> {
    CONFIG.as_ref().map_err(|msg| CliError::Config(msg.clone()))
}
