//! mapobject-core: convierte un mapping `{clave: registro}` en una secuencia
//! ordenada de registros con la clave inyectada.
pub mod constants;
pub mod errors;
pub mod key;
pub mod mapper;
pub mod typed;

pub use constants::DEFAULT_KEY_NAME;
pub use errors::MapError;
pub use key::{DefaultKey, KeyName};
pub use mapper::{map_object, Record, RecordMapper, RecordView};
pub use typed::{map_keyed, map_typed, Keyed, MapObjectResult, RecordMap};
