//! Ordered, integer-indexed sequence.

use std::fmt;
use std::mem;

use crate::container::{Container, ContainerKind};
use crate::error::WriteError;
use crate::integrity::Integrity;
use crate::key::{parse_index, Key};
use crate::value::Value;

/// Largest writable index, so a sequence never grows past `2^32 - 1` items.
pub const MAX_INDEX: usize = 4_294_967_294;

/// Ordered container addressed by index.
///
/// Writing past the end fills the gap with `Undefined`, up to [`MAX_INDEX`];
/// removing an element leaves an `Undefined` hole and keeps the length.
#[derive(Clone, Default)]
pub struct Sequence {
    items: Vec<Value>,
    integrity: Integrity,
}

impl Sequence {
    pub fn new() -> Self {
        Sequence::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = Value>) -> Self {
        Sequence {
            items: items.into_iter().collect(),
            integrity: Integrity::Extensible,
        }
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub(crate) fn detached(&self) -> Self {
        Sequence::from_items(self.items.iter().cloned())
    }
}

impl Container for Sequence {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Sequence
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn entries(&self) -> Vec<(Key, Value)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, value)| (Key::Index(index), value.clone()))
            .collect()
    }

    fn get(&self, key: &Key) -> Option<Value> {
        key.as_index().and_then(|index| self.items.get(index).cloned())
    }

    fn has_property(&self, name: &str) -> bool {
        parse_index(name).is_some_and(|index| index < self.items.len())
    }

    fn write_at(&mut self, key: Key, value: Value) -> Result<(), WriteError> {
        let Some(index) = key.as_index() else {
            return Err(WriteError::key_mismatch(key, ContainerKind::Sequence));
        };
        if let Some(slot) = self.items.get_mut(index) {
            if self.integrity == Integrity::Frozen {
                return Err(WriteError::frozen(index, ContainerKind::Sequence));
            }
            *slot = value;
            return Ok(());
        }
        if !self.integrity.is_extensible() {
            return Err(WriteError::not_extensible(index, ContainerKind::Sequence));
        }
        if index > MAX_INDEX {
            return Err(WriteError::index_out_of_range(
                index,
                ContainerKind::Sequence,
                MAX_INDEX,
            ));
        }
        self.items.resize(index, Value::Undefined);
        self.items.push(value);
        Ok(())
    }

    fn remove(&mut self, key: &Key) -> Result<Option<Value>, WriteError> {
        let Some(index) = key.as_index().filter(|index| *index < self.items.len()) else {
            return Ok(None);
        };
        if self.integrity >= Integrity::Sealed {
            return Err(WriteError::sealed(index, ContainerKind::Sequence));
        }
        Ok(Some(mem::take(&mut self.items[index])))
    }

    fn integrity(&self) -> Integrity {
        self.integrity
    }

    fn restrict(&mut self, level: Integrity) {
        self.integrity.raise(level);
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}
