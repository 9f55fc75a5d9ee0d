//! mapobject-rust
//!
//! Fachada del workspace:
//! - Expone `mapping` con el mapper dinámico y el tipado.
//! - Expone `errors` con el error de entrada mal formada.
//!
//! La implementación vive en `mapobject-core`; la CLI en `mapobject-cli`.

pub mod errors;
pub mod mapping;

pub use mapobject_core::key_name;
