// Reexport del error definido en `mapobject-core`.
pub use mapobject_core::errors::MapError;
