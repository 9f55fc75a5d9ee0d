//! Nombres de campo de la clave fijados en tiempo de compilación.
//!
//! Un tipo marcador implementa [`KeyName`] y se usa como parámetro genérico
//! de [`crate::typed::Keyed`], de modo que el nombre del campo inyectado forma
//! parte del tipo del resultado.

pub mod macros;

use crate::constants::DEFAULT_KEY_NAME;

/// Tipo marcador que fija el nombre del campo donde se inyecta la clave.
pub trait KeyName {
    const NAME: &'static str;
}

/// Marcador por defecto: inyecta la clave como `"key"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultKey;

impl KeyName for DefaultKey {
    const NAME: &'static str = DEFAULT_KEY_NAME;
}
