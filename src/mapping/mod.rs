// Reexport de la implementación única ubicada en `mapobject-core` para evitar
// duplicar la lógica de mapeo a nivel de workspace.
pub use mapobject_core::key::{DefaultKey, KeyName};
pub use mapobject_core::mapper::{map_object, Record, RecordMapper, RecordView};
pub use mapobject_core::typed::{map_keyed, map_typed, Keyed, MapObjectResult, RecordMap};
pub use mapobject_core::DEFAULT_KEY_NAME;
