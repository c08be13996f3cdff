//! Instance-of checks against the built-in constructors.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// A constructor a value can be an instance of.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueClass {
    /// Every non-primitive value: containers, callables and opaque values.
    Object,
    Array,
    Map,
    Set,
    Function,
    /// Any other constructor, matched against [`Value::type_name`], e.g.
    /// `Named("Date")` for an opaque date.
    Named(Arc<str>),
}

impl ValueClass {
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        ValueClass::Named(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            ValueClass::Object => "Object",
            ValueClass::Array => "Array",
            ValueClass::Map => "Map",
            ValueClass::Set => "Set",
            ValueClass::Function => "Function",
            ValueClass::Named(name) => name,
        }
    }
}

impl fmt::Display for ValueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Whether the value is an instance of `class`. Primitives are instances
    /// of nothing.
    pub fn is_instance_of(&self, class: &ValueClass) -> bool {
        if self.is_primitive() {
            return false;
        }
        match class {
            ValueClass::Object => true,
            ValueClass::Array => self.is_sequence(),
            ValueClass::Map => self.is_map(),
            ValueClass::Set => self.is_set(),
            ValueClass::Function => self.is_callable(),
            ValueClass::Named(name) => self.type_name() == &**name,
        }
    }
}
