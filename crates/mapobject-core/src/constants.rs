//! Constantes del mapper.

/// Nombre de campo usado para inyectar la clave cuando el llamador no indica
/// otro. Cambiarlo altera la forma de todos los registros producidos.
pub const DEFAULT_KEY_NAME: &str = "key";
