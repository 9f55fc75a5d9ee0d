//! Mapper dinámico sobre `serde_json`.
//!
//! Convierte un objeto JSON `{clave: registro}` en una secuencia de registros
//! con la clave inyectada bajo un nombre de campo configurable. El orden de
//! salida es el orden de iteración del `Map` de entrada (inserción, gracias a
//! `preserve_order`).
//!
//! Dos formas:
//! - Prestada (`map_record`, `map_value`, `map_object`): devuelve
//!   [`RecordView`]s que referencian los campos de la entrada sin copiarlos.
//! - Propia (`map_owned`, `map_to_value`): consume la entrada y mueve los
//!   valores a los registros de salida.
//!
//! En ambas la clave inyectada gana sobre un campo existente con el mismo
//! nombre y ocupa siempre la primera posición. Un valor que no es objeto
//! (`null`, número, string, array) no aporta campos: el registro resultante
//! sólo lleva la clave.

use std::borrow::Cow;

use log::{debug, trace};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::constants::DEFAULT_KEY_NAME;
use crate::errors::{kind_name, MapError};

/// Registro plano: nombre de campo -> valor arbitrario.
pub type Record = serde_json::Map<String, Value>;

/// Configuración del mapper (sólo el nombre del campo de la clave).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMapper {
    key_name: Cow<'static, str>,
}

impl Default for RecordMapper {
    fn default() -> Self { Self { key_name: Cow::Borrowed(DEFAULT_KEY_NAME) } }
}

impl RecordMapper {
    pub fn new() -> Self { Self::default() }

    /// Mapper que inyecta la clave bajo `key_name`. Cualquier string es
    /// válido, incluido uno que colisione con campos de los registros.
    pub fn with_key_name(key_name: impl Into<String>) -> Self {
        Self { key_name: Cow::Owned(key_name.into()) }
    }

    pub fn key_name(&self) -> &str { &self.key_name }

    /// Mapea un objeto ya decodificado sin copiar sus campos.
    pub fn map_record<'a>(&'a self, input: &'a Record) -> Vec<RecordView<'a>> {
        views(&self.key_name, input)
    }

    /// Igual que `map_record` pero acepta cualquier `Value`; rechaza lo que
    /// no sea un objeto.
    pub fn map_value<'a>(&'a self, input: &'a Value) -> Result<Vec<RecordView<'a>>, MapError> {
        match input {
            Value::Object(map) => Ok(self.map_record(map)),
            other => Err(reject_input(other)),
        }
    }

    /// Consume la entrada; los valores se mueven a la salida sin duplicarse.
    pub fn map_owned(&self, input: Record) -> Vec<Record> {
        trace!("map_owned: entries={} key_name={}", input.len(), self.key_name);
        input
            .into_iter()
            .map(|(key, value)| {
                let fields = match value {
                    Value::Object(fields) => fields,
                    _ => Record::new(),
                };
                merge_owned(&self.key_name, key, fields)
            })
            .collect()
    }

    /// Variante propia que devuelve directamente un array JSON.
    pub fn map_to_value(&self, input: Value) -> Result<Value, MapError> {
        match input {
            Value::Object(map) => {
                let records = self.map_owned(map);
                Ok(Value::Array(records.into_iter().map(Value::Object).collect()))
            }
            other => Err(reject_input(&other)),
        }
    }
}

/// Forma directa del contrato: `None` equivale a `Some("key")`.
pub fn map_object<'a>(input: &'a Record, key_name: Option<&'a str>) -> Vec<RecordView<'a>> {
    views(key_name.unwrap_or(DEFAULT_KEY_NAME), input)
}

fn views<'a>(key_name: &'a str, input: &'a Record) -> Vec<RecordView<'a>> {
    trace!("map_record: entries={} key_name={}", input.len(), key_name);
    input
        .iter()
        .map(|(key, value)| RecordView::new(key_name, key, value.as_object()))
        .collect()
}

pub(crate) fn merge_owned(key_name: &str, key: String, fields: Record) -> Record {
    let mut out = Record::with_capacity(fields.len() + 1);
    out.insert(key_name.to_string(), Value::String(key));
    for (field, value) in fields {
        if field != key_name {
            out.insert(field, value);
        }
    }
    out
}

fn reject_input(value: &Value) -> MapError {
    debug!("rejected input: expected object, found {}", kind_name(value));
    MapError::NotAnObject { found: kind_name(value).to_string() }
}

/// Registro de salida prestado: la clave más los campos del registro original
/// por referencia. `fields` es `None` cuando el valor original no era objeto.
#[derive(Debug, Clone)]
pub struct RecordView<'a> {
    key_name: &'a str,
    key: &'a str,
    key_value: Value,
    fields: Option<&'a Record>,
}

impl<'a> RecordView<'a> {
    fn new(key_name: &'a str, key: &'a str, fields: Option<&'a Record>) -> Self {
        Self { key_name, key, key_value: Value::String(key.to_string()), fields }
    }

    pub fn key(&self) -> &'a str { self.key }

    pub fn key_name(&self) -> &'a str { self.key_name }

    /// Valor de un campo; para `key_name` devuelve siempre la clave inyectada.
    pub fn get(&self, field: &str) -> Option<&Value> {
        if field == self.key_name {
            Some(&self.key_value)
        } else {
            self.shared(field)
        }
    }

    /// Referencia al valor original de la entrada (nunca la clave inyectada).
    pub fn shared(&self, field: &str) -> Option<&'a Value> {
        if field == self.key_name { None } else { self.fields.and_then(|f| f.get(field)) }
    }

    pub fn contains_field(&self, field: &str) -> bool {
        field == self.key_name || self.fields.is_some_and(|f| f.contains_key(field))
    }

    /// Número de campos del registro resultante (clave incluida).
    pub fn field_count(&self) -> usize {
        match self.fields {
            Some(fields) => fields.len() + 1 - usize::from(fields.contains_key(self.key_name)),
            None => 1,
        }
    }

    /// Campos en orden de salida: la clave primero, después el resto.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        let key_name = self.key_name;
        std::iter::once((key_name, &self.key_value)).chain(
            self.fields
                .into_iter()
                .flatten()
                .filter(move |(field, _)| field.as_str() != key_name)
                .map(|(field, value)| (field.as_str(), value)),
        )
    }

    /// Copia propia del registro (clona los valores).
    pub fn to_record(&self) -> Record {
        self.iter().map(|(field, value)| (field.to_string(), value.clone())).collect()
    }
}

impl Serialize for RecordView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.field_count()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}
