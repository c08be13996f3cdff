//! The container interface and the handle the walker works through.

use std::fmt;

use crate::collections::{AssocMap, Record, Sequence, UniqueSet};
use crate::error::WriteError;
use crate::integrity::Integrity;
use crate::key::Key;
use crate::shared::Shared;
use crate::value::Value;

/// Behavior shared by the four container shapes.
///
/// Writes follow the container's integrity level: new keys need an
/// extensible container, overwrites need a non-frozen one, removals need an
/// unsealed one.
pub trait Container: fmt::Debug + Send + Sync {
    fn kind(&self) -> ContainerKind;

    /// Number of own entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Own `(key, value)` pairs in enumeration order.
    fn entries(&self) -> Vec<(Key, Value)>;

    fn get(&self, key: &Key) -> Option<Value>;

    /// Own-key test by property name.
    fn has_property(&self, name: &str) -> bool;

    /// Attach `value` under `key` with the container's own semantics: field
    /// set, index set, keyed set, or set add (key ignored).
    fn write_at(&mut self, key: Key, value: Value) -> Result<(), WriteError>;

    /// Remove the entry under `key`, returning it if present.
    fn remove(&mut self, key: &Key) -> Result<Option<Value>, WriteError>;

    fn integrity(&self) -> Integrity;

    /// Raise the integrity level. Never lowers it.
    fn restrict(&mut self, level: Integrity);

    fn is_extensible(&self) -> bool {
        self.integrity().is_extensible()
    }

    fn is_sealed(&self) -> bool {
        self.integrity().reports_sealed(self.is_empty())
    }

    fn is_frozen(&self) -> bool {
        self.integrity().reports_frozen(self.is_empty())
    }
}

/// Shape of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Record,
    Sequence,
    Map,
    Set,
}

impl ContainerKind {
    pub const fn name(self) -> &'static str {
        match self {
            ContainerKind::Record => "record",
            ContainerKind::Sequence => "sequence",
            ContainerKind::Map => "map",
            ContainerKind::Set => "set",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle to a shared container of any shape.
///
/// Cloning clones the handle. All access goes through the container's lock,
/// which is held only for the duration of one call: `entries` returns an
/// owned snapshot, so callers may write into the same container while
/// iterating the snapshot.
#[derive(Clone)]
pub enum ContainerRef {
    Record(Shared<Record>),
    Sequence(Shared<Sequence>),
    Map(Shared<AssocMap>),
    Set(Shared<UniqueSet>),
}

impl ContainerRef {
    /// Allocate an empty, extensible container of the given shape.
    pub fn new(kind: ContainerKind) -> Self {
        match kind {
            ContainerKind::Record => ContainerRef::Record(Shared::new(Record::new())),
            ContainerKind::Sequence => ContainerRef::Sequence(Shared::new(Sequence::new())),
            ContainerKind::Map => ContainerRef::Map(Shared::new(AssocMap::new())),
            ContainerKind::Set => ContainerRef::Set(Shared::new(UniqueSet::new())),
        }
    }

    /// The container behind `value`, if it is one.
    ///
    /// Callables and opaque values are not containers here; a callable's
    /// own properties are reached with [`Callable::properties`](crate::Callable::properties).
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Record(record) => Some(ContainerRef::Record(record.clone())),
            Value::Sequence(items) => Some(ContainerRef::Sequence(items.clone())),
            Value::Map(map) => Some(ContainerRef::Map(map.clone())),
            Value::Set(set) => Some(ContainerRef::Set(set.clone())),
            _ => None,
        }
    }

    pub fn kind(&self) -> ContainerKind {
        match self {
            ContainerRef::Record(_) => ContainerKind::Record,
            ContainerRef::Sequence(_) => ContainerKind::Sequence,
            ContainerRef::Map(_) => ContainerKind::Map,
            ContainerRef::Set(_) => ContainerKind::Set,
        }
    }

    /// A fresh empty container of the same shape.
    pub fn empty_like(&self) -> Self {
        ContainerRef::new(self.kind())
    }

    /// A fresh container holding the same entries (one level deep), with the
    /// lock state reset to extensible.
    pub fn detached_copy(&self) -> Self {
        match self {
            ContainerRef::Record(record) => {
                ContainerRef::Record(Shared::new(record.read().detached()))
            }
            ContainerRef::Sequence(items) => {
                ContainerRef::Sequence(Shared::new(items.read().detached()))
            }
            ContainerRef::Map(map) => ContainerRef::Map(Shared::new(map.read().detached())),
            ContainerRef::Set(set) => ContainerRef::Set(Shared::new(set.read().detached())),
        }
    }

    /// The container as a value. Shares the allocation.
    pub fn to_value(&self) -> Value {
        match self {
            ContainerRef::Record(record) => Value::Record(record.clone()),
            ContainerRef::Sequence(items) => Value::Sequence(items.clone()),
            ContainerRef::Map(map) => Value::Map(map.clone()),
            ContainerRef::Set(set) => Value::Set(set.clone()),
        }
    }

    /// Whether both handles point at the same allocation.
    pub fn same_allocation(&self, other: &ContainerRef) -> bool {
        match (self, other) {
            (ContainerRef::Record(a), ContainerRef::Record(b)) => a.ptr_eq(b),
            (ContainerRef::Sequence(a), ContainerRef::Sequence(b)) => a.ptr_eq(b),
            (ContainerRef::Map(a), ContainerRef::Map(b)) => a.ptr_eq(b),
            (ContainerRef::Set(a), ContainerRef::Set(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    fn with<R>(&self, f: impl FnOnce(&dyn Container) -> R) -> R {
        match self {
            ContainerRef::Record(record) => f(&*record.read()),
            ContainerRef::Sequence(items) => f(&*items.read()),
            ContainerRef::Map(map) => f(&*map.read()),
            ContainerRef::Set(set) => f(&*set.read()),
        }
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut dyn Container) -> R) -> R {
        match self {
            ContainerRef::Record(record) => f(&mut *record.write()),
            ContainerRef::Sequence(items) => f(&mut *items.write()),
            ContainerRef::Map(map) => f(&mut *map.write()),
            ContainerRef::Set(set) => f(&mut *set.write()),
        }
    }

    pub fn len(&self) -> usize {
        self.with(|container| container.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with(|container| container.is_empty())
    }

    /// Snapshot of the own entries. The lock is released on return.
    pub fn entries(&self) -> Vec<(Key, Value)> {
        self.with(|container| container.entries())
    }

    pub fn get(&self, key: &Key) -> Option<Value> {
        self.with(|container| container.get(key))
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.with(|container| container.has_property(name))
    }

    pub fn write_at(&self, key: Key, value: Value) -> Result<(), WriteError> {
        self.with_mut(|container| container.write_at(key, value))
    }

    pub fn remove(&self, key: &Key) -> Result<Option<Value>, WriteError> {
        self.with_mut(|container| container.remove(key))
    }

    pub fn integrity(&self) -> Integrity {
        self.with(|container| container.integrity())
    }

    pub fn restrict(&self, level: Integrity) {
        self.with_mut(|container| container.restrict(level));
    }

    pub fn is_extensible(&self) -> bool {
        self.with(|container| container.is_extensible())
    }

    pub fn is_sealed(&self) -> bool {
        self.with(|container| container.is_sealed())
    }

    pub fn is_frozen(&self) -> bool {
        self.with(|container| container.is_frozen())
    }

    /// Deep structural equality.
    ///
    /// Records compare as unordered field sets; sequences, maps and sets
    /// compare entry by entry in order. Map keys compare by SameValueZero.
    /// Integrity levels are not part of equality.
    pub fn structurally_equals(&self, other: &ContainerRef) -> bool {
        if self.same_allocation(other) {
            return true;
        }
        if self.kind() != other.kind() || self.len() != other.len() {
            return false;
        }
        match (self, other) {
            (ContainerRef::Record(a), ContainerRef::Record(b)) => {
                let (a, b) = (a.read(), b.read());
                let equal = a
                    .fields()
                    .all(|(name, value)| b.field(name).is_some_and(|theirs| value == theirs));
                equal
            }
            _ => self
                .entries()
                .into_iter()
                .zip(other.entries())
                .all(|((key_a, a), (key_b, b))| key_a == key_b && a == b),
        }
    }
}

impl fmt::Debug for ContainerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerRef::Record(record) => f.debug_tuple("Record").field(record).finish(),
            ContainerRef::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            ContainerRef::Map(map) => f.debug_tuple("Map").field(map).finish(),
            ContainerRef::Set(set) => f.debug_tuple("Set").field(set).finish(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests unwrap writes that must succeed")]
mod tests;
