//! Collection of unique values.

use std::fmt;

use super::FxIndexSet;
use crate::container::{Container, ContainerKind};
use crate::error::WriteError;
use crate::integrity::Integrity;
use crate::key::{parse_index, Identity, Key};
use crate::value::Value;

/// Unique values in insertion order, compared by SameValueZero.
///
/// Sets have no external keys: children enumerate under their position, and
/// `write_at` ignores the key and adds the value.
#[derive(Clone, Default)]
pub struct UniqueSet {
    members: FxIndexSet<Identity>,
    integrity: Integrity,
}

impl UniqueSet {
    pub fn new() -> Self {
        UniqueSet::default()
    }

    /// Build a set from values. Duplicates collapse to their first position.
    pub fn from_members(members: impl IntoIterator<Item = Value>) -> Self {
        UniqueSet {
            members: members.into_iter().map(Identity::new).collect(),
            integrity: Integrity::Extensible,
        }
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.members.contains(&Identity::new(value.clone()))
    }

    pub fn members(&self) -> impl Iterator<Item = &Value> {
        self.members.iter().map(Identity::value)
    }

    pub(crate) fn detached(&self) -> Self {
        UniqueSet {
            members: self.members.clone(),
            integrity: Integrity::Extensible,
        }
    }

    fn position_of(&self, key: &Key) -> Option<usize> {
        match key {
            Key::Entry(value) => self.members.get_index_of(&Identity::new(value.clone())),
            other => other.as_index().filter(|index| *index < self.members.len()),
        }
    }
}

impl Container for UniqueSet {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Set
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    fn entries(&self) -> Vec<(Key, Value)> {
        self.members
            .iter()
            .enumerate()
            .map(|(index, member)| (Key::Index(index), member.value().clone()))
            .collect()
    }

    fn get(&self, key: &Key) -> Option<Value> {
        let index = self.position_of(key)?;
        self.members.get_index(index).map(|member| member.value().clone())
    }

    fn has_property(&self, name: &str) -> bool {
        parse_index(name).is_some_and(|index| index < self.members.len())
    }

    fn write_at(&mut self, _key: Key, value: Value) -> Result<(), WriteError> {
        let member = Identity::new(value);
        if self.members.contains(&member) {
            return Ok(());
        }
        if !self.integrity.is_extensible() {
            return Err(WriteError::not_extensible(member.value(), ContainerKind::Set));
        }
        self.members.insert(member);
        Ok(())
    }

    fn remove(&mut self, key: &Key) -> Result<Option<Value>, WriteError> {
        let Some(index) = self.position_of(key) else {
            return Ok(None);
        };
        if self.integrity >= Integrity::Sealed {
            return Err(WriteError::sealed(key, ContainerKind::Set));
        }
        Ok(self.members.shift_remove_index(index).map(Identity::into_value))
    }

    fn integrity(&self) -> Integrity {
        self.integrity
    }

    fn restrict(&mut self, level: Integrity) {
        self.integrity.raise(level);
    }
}

impl fmt::Debug for UniqueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.members()).finish()
    }
}
