//! The value graph node.
//!
//! # Allocation
//!
//! Containers and opaque values live in [`Shared`] allocations whose
//! constructor is private to this crate. Build them through the factories:
//!
//! ```text
//! let point = Value::record([("x", Value::Int(1)), ("y", Value::Int(2))]);
//! let list = Value::sequence([Value::Int(1), point.clone()]);
//! ```
//!
//! # Equality
//!
//! `PartialEq` is structural: two separately allocated records with equal
//! fields are equal. Use [`Value::same_allocation`] for identity and
//! [`Value::same_value_zero`] for map-key identity.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use strata_stack::ensure_sufficient_stack;

use crate::callable::Callable;
use crate::collections::{AssocMap, Record, Sequence, UniqueSet};
use crate::container::ContainerRef;
use crate::integrity::Integrity;
use crate::key::Key;
use crate::opaque::Opaque;
use crate::shared::Shared;

/// A node of the value graph.
#[derive(Clone, Default)]
pub enum Value {
    // Primitives
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),

    // Objects
    Callable(Callable),
    /// Plain key/value record.
    Record(Shared<Record>),
    /// Ordered, integer-indexed sequence.
    Sequence(Shared<Sequence>),
    /// Associative map with arbitrary keys.
    Map(Shared<AssocMap>),
    /// Collection of unique values.
    Set(Shared<UniqueSet>),
    /// Built-in object with no walkable structure.
    Opaque(Shared<Opaque>),
}

// Factory methods
impl Value {
    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Record with the given fields, in order.
    pub fn record<K: Into<Arc<str>>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Record(Shared::new(Record::from_fields(fields)))
    }

    pub fn record_empty() -> Self {
        Value::Record(Shared::new(Record::new()))
    }

    pub fn sequence(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Sequence(Shared::new(Sequence::from_items(items)))
    }

    pub fn sequence_empty() -> Self {
        Value::Sequence(Shared::new(Sequence::new()))
    }

    pub fn map(pairs: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(Shared::new(AssocMap::from_pairs(pairs)))
    }

    pub fn set(members: impl IntoIterator<Item = Value>) -> Self {
        Value::Set(Shared::new(UniqueSet::from_members(members)))
    }

    pub fn opaque(type_name: impl Into<Arc<str>>, repr: impl Into<Arc<str>>) -> Self {
        Value::Opaque(Shared::new(Opaque::new(type_name, repr)))
    }

    /// Plain bindable function.
    pub fn function<F>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Callable(Callable::function(name, body))
    }
}

// Classification oracle
impl Value {
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Undefined, null, booleans, numbers and strings.
    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Undefined
                | Value::Null
                | Value::Bool(_)
                | Value::Int(_)
                | Value::Float(_)
                | Value::Str(_)
        )
    }

    #[inline]
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Callable(_))
    }

    #[inline]
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    #[inline]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    #[inline]
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        matches!(self, Value::Set(_))
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        matches!(self, Value::Opaque(_))
    }

    /// Record, sequence, map or set.
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Value::Record(_) | Value::Sequence(_) | Value::Map(_) | Value::Set(_)
        )
    }

    /// Object-like and not callable: containers and opaque values.
    #[inline]
    pub fn is_object(&self) -> bool {
        self.is_container() || self.is_opaque()
    }
}

// Accessors
impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric value, widening integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(n) => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "numbers share one numeric domain; large ints round like the host does"
                )]
                let widened = *n as f64;
                Some(widened)
            }
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Callable(callable) => Some(callable),
            _ => None,
        }
    }

    /// The container behind this value, if it is one.
    pub fn as_container(&self) -> Option<ContainerRef> {
        ContainerRef::from_value(self)
    }

    /// Host-style type name: `"undefined"`, `"number"`, `"Object"`,
    /// `"Array"`, the opaque type name, ...
    pub fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) | Value::Float(_) => "number",
            Value::Str(_) => "string",
            Value::Callable(_) => "Function",
            Value::Record(_) => "Object",
            Value::Sequence(_) => "Array",
            Value::Map(_) => "Map",
            Value::Set(_) => "Set",
            Value::Opaque(opaque) => return Cow::Owned(opaque.read().type_name().to_owned()),
        })
    }
}

// Identity
impl Value {
    /// Whether both values are the same allocation. Primitives are never
    /// the same allocation.
    pub fn same_allocation(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Callable(a), Value::Callable(b)) => a.ptr_eq(b),
            (Value::Record(a), Value::Record(b)) => a.ptr_eq(b),
            (Value::Sequence(a), Value::Sequence(b)) => a.ptr_eq(b),
            (Value::Map(a), Value::Map(b)) => a.ptr_eq(b),
            (Value::Set(a), Value::Set(b)) => a.ptr_eq(b),
            (Value::Opaque(a), Value::Opaque(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// SameValueZero: primitives by value (`NaN` equals itself, `-0` equals
    /// `0`), objects by allocation.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (a, b) if a.is_number() && b.is_number() => match (a.as_float(), b.as_float()) {
                (Some(x), Some(y)) => x == y || (x.is_nan() && y.is_nan()),
                _ => false,
            },
            (a, b) => a.same_allocation(b),
        }
    }

    /// Allocation address; zero for primitives.
    pub(crate) fn addr(&self) -> usize {
        match self {
            Value::Callable(callable) => callable.addr(),
            Value::Record(record) => record.addr(),
            Value::Sequence(items) => items.addr(),
            Value::Map(map) => map.addr(),
            Value::Set(set) => set.addr(),
            Value::Opaque(opaque) => opaque.addr(),
            _ => 0,
        }
    }

    /// The value coerced to a property name, the way the host stringifies
    /// keys.
    pub fn to_property_key(&self) -> Cow<'_, str> {
        match self {
            Value::Undefined => Cow::Borrowed("undefined"),
            Value::Null => Cow::Borrowed("null"),
            Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Value::Int(n) => Cow::Owned(n.to_string()),
            Value::Float(n) => Cow::Owned(format_number(*n)),
            Value::Str(s) => Cow::Borrowed(s),
            Value::Callable(callable) => Cow::Owned(callable.to_string()),
            Value::Record(_) => Cow::Borrowed("[object Object]"),
            Value::Sequence(items) => Cow::Owned(
                items
                    .read()
                    .items()
                    .iter()
                    .map(|item| {
                        if item.is_nullish() {
                            String::new()
                        } else {
                            item.to_property_key().into_owned()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Value::Map(_) => Cow::Borrowed("[object Map]"),
            Value::Set(_) => Cow::Borrowed("[object Set]"),
            Value::Opaque(opaque) => Cow::Owned(opaque.read().repr().to_owned()),
        }
    }
}

/// Number formatting as the host prints numbers.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if n == 0.0 {
        "0".to_owned()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

// Own structure and integrity
impl Value {
    /// Own `(key, value)` children: container entries, callable properties,
    /// or the characters of a string. Other values have none.
    pub fn own_entries(&self) -> Vec<(Key, Value)> {
        match self {
            Value::Str(s) => s
                .chars()
                .enumerate()
                .map(|(index, c)| (Key::Index(index), Value::string(c.to_string())))
                .collect(),
            Value::Callable(callable) => callable.properties().entries(),
            other => other
                .as_container()
                .map(|container| container.entries())
                .unwrap_or_default(),
        }
    }

    /// Own-key test by property name.
    pub fn has_own_property(&self, name: &str) -> bool {
        match self {
            Value::Str(s) => crate::key::parse_index(name).is_some_and(|i| i < s.chars().count()),
            Value::Callable(callable) => callable.properties().has_property(name),
            other => other
                .as_container()
                .is_some_and(|container| container.has_property(name)),
        }
    }

    /// Number of own entries.
    pub fn own_len(&self) -> usize {
        match self {
            Value::Str(s) => s.chars().count(),
            Value::Callable(callable) => callable.properties().len(),
            other => other.as_container().map_or(0, |container| container.len()),
        }
    }

    /// Integrity level. Primitives are immutable and report `Frozen`.
    pub fn integrity(&self) -> Integrity {
        match self {
            Value::Callable(callable) => callable.integrity(),
            Value::Opaque(opaque) => opaque.read().integrity(),
            other => other
                .as_container()
                .map_or(Integrity::Frozen, |container| container.integrity()),
        }
    }

    /// Raise the integrity level in place. No-op on primitives.
    pub fn restrict(&self, level: Integrity) {
        match self {
            Value::Callable(callable) => callable.restrict(level),
            Value::Opaque(opaque) => opaque.write().restrict(level),
            other => {
                if let Some(container) = other.as_container() {
                    container.restrict(level);
                }
            }
        }
    }

    pub fn is_extensible(&self) -> bool {
        !self.is_primitive() && self.integrity().is_extensible()
    }

    pub fn is_sealed(&self) -> bool {
        match self {
            Value::Callable(callable) => callable.is_sealed(),
            _ => self.is_primitive() || self.integrity().reports_sealed(self.own_len() == 0),
        }
    }

    pub fn is_frozen(&self) -> bool {
        match self {
            Value::Callable(callable) => callable.is_frozen(),
            _ => self.is_primitive() || self.integrity().reports_frozen(self.own_len() == 0),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (a, b) if a.is_number() && b.is_number() => a.as_float() == b.as_float(),
            // Callables are equal by body identity
            (Value::Callable(a), Value::Callable(b)) => a.body_eq(b),
            (Value::Opaque(a), Value::Opaque(b)) => {
                if a.ptr_eq(b) {
                    return true;
                }
                let (a, b) = (a.read(), b.read());
                a.type_name() == b.type_name() && a.repr() == b.repr()
            }
            (a, b) => match (a.as_container(), b.as_container()) {
                (Some(a), Some(b)) => a.structurally_equals(&b),
                _ => false,
            },
        })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Callable(callable) => fmt::Debug::fmt(callable, f),
            Value::Record(record) => f.debug_tuple("Record").field(record).finish(),
            Value::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Value::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Value::Set(set) => f.debug_tuple("Set").field(set).finish(),
            Value::Opaque(opaque) => f.debug_tuple("Opaque").field(opaque).finish(),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::Callable(callable) => write!(f, "{callable}"),
            Value::Record(record) => {
                write!(f, "{{")?;
                for (i, (name, value)) in record.read().fields().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.read().items().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "Map {{")?;
                for (i, (key, value)) in map.read().pairs().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key} => {value}")?;
                }
                write!(f, "}}")
            }
            Value::Set(set) => {
                write!(f, "Set {{")?;
                for (i, member) in set.read().members().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{member}")?;
                }
                write!(f, "}}")
            }
            Value::Opaque(opaque) => {
                let opaque = opaque.read();
                write!(f, "<{} {}>", opaque.type_name(), opaque.repr())
            }
        })
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Value::Callable(callable)
    }
}

impl From<ContainerRef> for Value {
    fn from(container: ContainerRef) -> Self {
        container.to_value()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests unwrap writes that must succeed")]
mod tests;
