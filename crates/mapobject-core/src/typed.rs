//! Variante tipada del mapper.
//!
//! El nombre del campo inyectado se fija con un marcador [`KeyName`] y cada
//! elemento del resultado es un [`Keyed`]: la clave más una referencia al
//! registro original. `Deref<Target = T>` da acceso tipado a los campos del
//! registro (`result[0].price`) y la serialización produce el registro plano
//! `{<K::NAME>: clave, ...campos}`.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use log::trace;
use serde::ser::{Error as _, Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::errors::MapError;
use crate::key::{DefaultKey, KeyName};
use crate::mapper::{merge_owned, Record};

/// Mapping ordenado por inserción, entrada canónica de la variante tipada.
pub type RecordMap<T> = indexmap::IndexMap<String, T>;

/// Tipo del resultado de `map_typed`.
pub type MapObjectResult<'a, T, K = DefaultKey> = Vec<Keyed<'a, T, K>>;

/// Registro tipado con su clave.
///
/// `key()`, `to_record()` y la serialización siempre exponen la clave de la
/// entrada bajo `K::NAME`. El acceso a campos vía `Deref` va directo a `T`: si
/// `T` tiene un campo con el mismo nombre que `K::NAME`, `keyed.<campo>`
/// devuelve el valor original del registro, no la clave.
pub struct Keyed<'a, T, K = DefaultKey> {
    key: &'a str,
    value: &'a T,
    _key_name: PhantomData<fn() -> K>,
}

impl<'a, T, K: KeyName> Keyed<'a, T, K> {
    pub fn new(key: &'a str, value: &'a T) -> Self {
        Self { key, value, _key_name: PhantomData }
    }

    pub fn key(&self) -> &'a str { self.key }

    pub fn key_name(&self) -> &'static str { K::NAME }

    /// Registro original, compartido con la entrada.
    pub fn value(&self) -> &'a T { self.value }
}

impl<T: Serialize, K: KeyName> Keyed<'_, T, K> {
    /// Materializa el registro plano como objeto JSON propio.
    pub fn to_record(&self) -> Result<Record, MapError> {
        Ok(merge_owned(K::NAME, self.key.to_string(), record_of(self.value)?))
    }
}

impl<T, K> Clone for Keyed<'_, T, K> {
    fn clone(&self) -> Self { *self }
}

impl<T, K> Copy for Keyed<'_, T, K> {}

impl<T, K> Deref for Keyed<'_, T, K> {
    type Target = T;

    fn deref(&self) -> &T { self.value }
}

impl<T: fmt::Debug, K: KeyName> fmt::Debug for Keyed<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyed")
            .field("key_name", &K::NAME)
            .field("key", &self.key)
            .field("value", self.value)
            .finish()
    }
}

impl<T: Serialize, K: KeyName> Serialize for Keyed<'_, T, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = record_of(self.value).map_err(S::Error::custom)?;
        let shadowed = usize::from(fields.contains_key(K::NAME));
        let mut map = serializer.serialize_map(Some(fields.len() + 1 - shadowed))?;
        map.serialize_entry(K::NAME, self.key)?;
        for (field, value) in &fields {
            if field != K::NAME {
                map.serialize_entry(field, value)?;
            }
        }
        map.end()
    }
}

// Un registro que no serializa a objeto no aporta campos.
fn record_of<T: Serialize>(value: &T) -> Result<Record, MapError> {
    match serde_json::to_value(value).map_err(|e| MapError::Serialize(e.to_string()))? {
        Value::Object(map) => Ok(map),
        _ => Ok(Record::new()),
    }
}

/// Mapea las entradas en su orden de iteración inyectando la clave bajo
/// `K::NAME`. No copia los registros: cada `Keyed` los referencia.
pub fn map_typed<'a, K, T, S>(entries: impl IntoIterator<Item = (&'a S, &'a T)>) -> MapObjectResult<'a, T, K>
where
    K: KeyName,
    S: AsRef<str> + ?Sized + 'a,
    T: 'a,
{
    let out: MapObjectResult<'a, T, K> =
        entries.into_iter().map(|(key, value)| Keyed::new(key.as_ref(), value)).collect();
    trace!("map_typed: entries={} key_name={}", out.len(), K::NAME);
    out
}

/// `map_typed` con el nombre de clave por defecto (`"key"`).
pub fn map_keyed<'a, T, S>(entries: impl IntoIterator<Item = (&'a S, &'a T)>) -> MapObjectResult<'a, T>
where
    S: AsRef<str> + ?Sized + 'a,
    T: 'a,
{
    map_typed::<DefaultKey, T, S>(entries)
}
