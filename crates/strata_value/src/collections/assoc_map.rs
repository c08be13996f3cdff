//! Associative map with opaque keys.

use std::fmt;

use super::FxIndexMap;
use crate::container::{Container, ContainerKind};
use crate::error::WriteError;
use crate::integrity::Integrity;
use crate::key::{Identity, Key};
use crate::value::Value;

/// Map from arbitrary values to values, in insertion order.
///
/// Keys compare by SameValueZero (see [`Identity`]): a record used as a key
/// is found again only through the same allocation.
#[derive(Clone, Default)]
pub struct AssocMap {
    entries: FxIndexMap<Identity, Value>,
    integrity: Integrity,
}

impl AssocMap {
    pub fn new() -> Self {
        AssocMap::default()
    }

    /// Build a map from `(key, value)` pairs. Later duplicates win.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Value, Value)>) -> Self {
        AssocMap {
            entries: pairs
                .into_iter()
                .map(|(key, value)| (Identity::new(key), value))
                .collect(),
            integrity: Integrity::Extensible,
        }
    }

    /// Look up by key value.
    pub fn get_value(&self, key: &Value) -> Option<&Value> {
        self.entries.get(&Identity::new(key.clone()))
    }

    /// Iterate `(key, value)` pairs in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(key, value)| (key.value(), value))
    }

    pub(crate) fn detached(&self) -> Self {
        AssocMap {
            entries: self.entries.clone(),
            integrity: Integrity::Extensible,
        }
    }
}

impl Container for AssocMap {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Map
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn entries(&self) -> Vec<(Key, Value)> {
        self.entries
            .iter()
            .map(|(key, value)| (Key::Entry(key.value().clone()), value.clone()))
            .collect()
    }

    fn get(&self, key: &Key) -> Option<Value> {
        self.entries
            .get(&Identity::new(key.clone().into_value()))
            .cloned()
    }

    fn has_property(&self, name: &str) -> bool {
        self.entries
            .keys()
            .any(|key| key.value().to_property_key() == name)
    }

    fn write_at(&mut self, key: Key, value: Value) -> Result<(), WriteError> {
        let key = Identity::new(key.into_value());
        if let Some(slot) = self.entries.get_mut(&key) {
            if self.integrity == Integrity::Frozen {
                return Err(WriteError::frozen(key.value(), ContainerKind::Map));
            }
            *slot = value;
            return Ok(());
        }
        if !self.integrity.is_extensible() {
            return Err(WriteError::not_extensible(key.value(), ContainerKind::Map));
        }
        self.entries.insert(key, value);
        Ok(())
    }

    fn remove(&mut self, key: &Key) -> Result<Option<Value>, WriteError> {
        let key = Identity::new(key.clone().into_value());
        if !self.entries.contains_key(&key) {
            return Ok(None);
        }
        if self.integrity >= Integrity::Sealed {
            return Err(WriteError::sealed(key.value(), ContainerKind::Map));
        }
        Ok(self.entries.shift_remove(&key))
    }

    fn integrity(&self) -> Integrity {
        self.integrity
    }

    fn restrict(&mut self, level: Integrity) {
        self.integrity.raise(level);
    }
}

impl fmt::Debug for AssocMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.pairs()).finish()
    }
}
