//! Exotic built-in objects the walker does not look inside.

use std::fmt;
use std::sync::Arc;

use crate::integrity::Integrity;

/// A built-in object with no walkable structure: a date, a regex, a
/// promise, an iterator object.
///
/// Carries a type name for instance checks, a display payload, and its own
/// integrity level so the lock operations can still lock it in place.
#[derive(Clone)]
pub struct Opaque {
    type_name: Arc<str>,
    repr: Arc<str>,
    integrity: Integrity,
}

impl Opaque {
    pub fn new(type_name: impl Into<Arc<str>>, repr: impl Into<Arc<str>>) -> Self {
        Opaque {
            type_name: type_name.into(),
            repr: repr.into(),
            integrity: Integrity::Extensible,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn repr(&self) -> &str {
        &self.repr
    }

    pub fn integrity(&self) -> Integrity {
        self.integrity
    }

    pub fn restrict(&mut self, level: Integrity) {
        self.integrity.raise(level);
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.type_name, self.repr)
    }
}
