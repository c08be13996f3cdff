//! Plain key/value record.

use std::fmt;
use std::sync::Arc;

use super::FxIndexMap;
use crate::container::{Container, ContainerKind};
use crate::error::WriteError;
use crate::integrity::Integrity;
use crate::key::Key;
use crate::value::Value;

/// Plain key/value container with string keys, in insertion order.
#[derive(Clone, Default)]
pub struct Record {
    fields: FxIndexMap<Arc<str>, Value>,
    integrity: Integrity,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    /// Build a record from `(name, value)` pairs. Later duplicates win.
    pub fn from_fields<K: Into<Arc<str>>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Record {
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
            integrity: Integrity::Extensible,
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Iterate fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (&**name, value))
    }

    /// Same fields, lock state reset.
    pub(crate) fn detached(&self) -> Self {
        Record::from_fields(self.fields.iter().map(|(k, v)| (Arc::clone(k), v.clone())))
    }
}

impl Container for Record {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Record
    }

    fn len(&self) -> usize {
        self.fields.len()
    }

    fn entries(&self) -> Vec<(Key, Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (Key::Field(Arc::clone(name)), value.clone()))
            .collect()
    }

    fn get(&self, key: &Key) -> Option<Value> {
        self.fields.get(key.property_name().as_ref()).cloned()
    }

    fn has_property(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    fn write_at(&mut self, key: Key, value: Value) -> Result<(), WriteError> {
        let name = match key {
            Key::Field(name) => name,
            other => Arc::from(other.property_name().as_ref()),
        };
        if let Some(slot) = self.fields.get_mut(&*name) {
            if self.integrity == Integrity::Frozen {
                return Err(WriteError::frozen(name, ContainerKind::Record));
            }
            *slot = value;
            return Ok(());
        }
        if !self.integrity.is_extensible() {
            return Err(WriteError::not_extensible(name, ContainerKind::Record));
        }
        self.fields.insert(name, value);
        Ok(())
    }

    fn remove(&mut self, key: &Key) -> Result<Option<Value>, WriteError> {
        let name = key.property_name();
        if !self.fields.contains_key(name.as_ref()) {
            return Ok(None);
        }
        if self.integrity >= Integrity::Sealed {
            return Err(WriteError::sealed(name, ContainerKind::Record));
        }
        Ok(self.fields.shift_remove(name.as_ref()))
    }

    fn integrity(&self) -> Integrity {
        self.integrity
    }

    fn restrict(&mut self, level: Integrity) {
        self.integrity.raise(level);
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields()).finish()
    }
}
