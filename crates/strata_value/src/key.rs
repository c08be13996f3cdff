//! Container keys and SameValueZero identity.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::value::Value;

/// Address of a child inside its container.
///
/// Records and callable properties use `Field`, sequences and set positions
/// use `Index`, maps use `Entry` with the original key value. Containers
/// coerce foreign keys where the host would (a record accepts `Index(2)` as
/// field `"2"`; a sequence accepts field `"2"` as index 2).
#[derive(Clone)]
pub enum Key {
    Field(Arc<str>),
    Index(usize),
    Entry(Value),
}

impl Key {
    /// Create a field key.
    #[inline]
    pub fn field(name: impl Into<Arc<str>>) -> Self {
        Key::Field(name.into())
    }

    /// The key as a property name, the way the host coerces keys to strings.
    pub fn property_name(&self) -> Cow<'_, str> {
        match self {
            Key::Field(name) => Cow::Borrowed(name),
            Key::Index(index) => Cow::Owned(index.to_string()),
            Key::Entry(value) => value.to_property_key(),
        }
    }

    /// The key as a sequence index, if it is one.
    ///
    /// Only canonical decimal names count: `"2"` is an index, `"02"` is not.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            other => parse_index(&other.property_name()),
        }
    }

    /// The same key coerced to a field name.
    pub fn to_field(&self) -> Key {
        match self {
            Key::Field(name) => Key::Field(Arc::clone(name)),
            other => Key::Field(Arc::from(other.property_name().as_ref())),
        }
    }

    /// The key as a value, for use as a map key.
    pub fn into_value(self) -> Value {
        match self {
            Key::Field(name) => Value::Str(name),
            Key::Index(index) => i64::try_from(index).map_or(Value::Undefined, Value::Int),
            Key::Entry(value) => value,
        }
    }
}

pub(crate) fn parse_index(name: &str) -> Option<usize> {
    let index = name.parse::<usize>().ok()?;
    (index.to_string() == name).then_some(index)
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Field(a), Key::Field(b)) => a == b,
            (Key::Index(a), Key::Index(b)) => a == b,
            (Key::Entry(a), Key::Entry(b)) => a.same_value_zero(b),
            _ => false,
        }
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Field(name) => write!(f, "Field({name:?})"),
            Key::Index(index) => write!(f, "Index({index})"),
            Key::Entry(value) => write!(f, "Entry({value:?})"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Field(name) => f.write_str(name),
            Key::Index(index) => write!(f, "{index}"),
            Key::Entry(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Field(Arc::from(name))
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Field(Arc::from(name))
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

/// A value compared by SameValueZero.
///
/// Scalars compare by value (`NaN` equals `NaN`, `0.0` equals `-0.0`,
/// `Int(1)` equals `Float(1.0)`); containers, callables and opaque values
/// compare by allocation. This is the key identity of maps and sets.
#[derive(Clone)]
pub struct Identity(Value);

impl Identity {
    #[inline]
    pub fn new(value: Value) -> Self {
        Identity(value)
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.0
    }

    #[inline]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_value_zero(&other.0)
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            Value::Undefined => 0u8.hash(state),
            Value::Null => 1u8.hash(state),
            Value::Bool(b) => {
                2u8.hash(state);
                b.hash(state);
            }
            Value::Int(n) => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "Int and Float keys must hash alike when numerically equal"
                )]
                let as_float = *n as f64;
                3u8.hash(state);
                number_bits(as_float).hash(state);
            }
            Value::Float(n) => {
                3u8.hash(state);
                number_bits(*n).hash(state);
            }
            Value::Str(s) => {
                4u8.hash(state);
                s.hash(state);
            }
            other => {
                5u8.hash(state);
                other.addr().hash(state);
            }
        }
    }
}

/// Bit pattern with `-0.0` folded into `0.0` and every `NaN` folded together.
fn number_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else if n == 0.0 {
        0.0f64.to_bits()
    } else {
        n.to_bits()
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
