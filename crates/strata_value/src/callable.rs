//! Callable values: plain functions, generators, async functions and bound
//! functions.

use std::fmt;
use std::sync::{Arc, Weak};

use crate::collections::{AssocMap, Record, Sequence, UniqueSet};
use crate::container::{Container, ContainerRef};
use crate::error::{CallableError, WriteError};
use crate::integrity::Integrity;
use crate::key::Key;
use crate::opaque::Opaque;
use crate::shared::{Shared, WeakShared};
use crate::value::Value;

/// Callable body: `(receiver, arguments) -> result`.
pub type CallableBody = Arc<dyn Fn(&Value, &[Value]) -> Value + Send + Sync>;

/// What sort of callable a value is. All of them classify as callables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallableKind {
    Function,
    Generator,
    Async,
    AsyncGenerator,
    /// Produced by [`Callable::bind`].
    Bound,
}

/// A callable value with its own property record.
///
/// Callables are immutable apart from their properties and integrity level.
/// Rebinding produces a new callable sharing the body.
#[derive(Clone)]
pub struct Callable(Arc<CallableInner>);

struct CallableInner {
    name: Arc<str>,
    kind: CallableKind,
    body: CallableBody,
    receiver: Option<Receiver>,
    bindable: bool,
    properties: Shared<Record>,
}

/// Bound receiver.
///
/// Heap receivers are held weakly: a callable bound to the container that
/// holds it must not keep that container alive. A receiver that has been
/// dropped resolves to `Undefined`.
#[derive(Clone)]
enum Receiver {
    Scalar(Value),
    Record(WeakShared<Record>),
    Sequence(WeakShared<Sequence>),
    Map(WeakShared<AssocMap>),
    Set(WeakShared<UniqueSet>),
    Callable(Weak<CallableInner>),
    Opaque(WeakShared<Opaque>),
}

impl Receiver {
    fn new(value: &Value) -> Self {
        match value {
            Value::Record(record) => Receiver::Record(record.downgrade()),
            Value::Sequence(items) => Receiver::Sequence(items.downgrade()),
            Value::Map(map) => Receiver::Map(map.downgrade()),
            Value::Set(set) => Receiver::Set(set.downgrade()),
            Value::Callable(callable) => Receiver::Callable(Arc::downgrade(&callable.0)),
            Value::Opaque(opaque) => Receiver::Opaque(opaque.downgrade()),
            scalar => Receiver::Scalar(scalar.clone()),
        }
    }

    fn resolve(&self) -> Value {
        let live = match self {
            Receiver::Scalar(value) => return value.clone(),
            Receiver::Record(record) => record.upgrade().map(Value::Record),
            Receiver::Sequence(items) => items.upgrade().map(Value::Sequence),
            Receiver::Map(map) => map.upgrade().map(Value::Map),
            Receiver::Set(set) => set.upgrade().map(Value::Set),
            Receiver::Callable(callable) => callable
                .upgrade()
                .map(|inner| Value::Callable(Callable(inner))),
            Receiver::Opaque(opaque) => opaque.upgrade().map(Value::Opaque),
        };
        live.unwrap_or(Value::Undefined)
    }
}

impl Callable {
    /// Create a bindable callable of the given kind.
    pub fn new(name: impl Into<Arc<str>>, kind: CallableKind, body: CallableBody) -> Self {
        Callable::build(name.into(), kind, body, None, true)
    }

    /// Create a plain bindable function.
    pub fn function<F>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        Callable::new(name, CallableKind::Function, Arc::new(body))
    }

    /// Create a host function. Host functions have no receiver slot and
    /// refuse to bind.
    pub fn native<F>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        Callable::build(name.into(), CallableKind::Function, Arc::new(body), None, false)
    }

    fn build(
        name: Arc<str>,
        kind: CallableKind,
        body: CallableBody,
        receiver: Option<Receiver>,
        bindable: bool,
    ) -> Self {
        Callable(Arc::new(CallableInner {
            name,
            kind,
            body,
            receiver,
            bindable,
            properties: Shared::new(Record::new()),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn kind(&self) -> CallableKind {
        self.0.kind
    }

    pub fn is_bound(&self) -> bool {
        self.0.receiver.is_some()
    }

    pub fn is_bindable(&self) -> bool {
        self.0.bindable
    }

    /// The bound receiver, `Undefined` for unbound callables.
    pub fn receiver(&self) -> Value {
        self.0
            .receiver
            .as_ref()
            .map_or(Value::Undefined, Receiver::resolve)
    }

    /// Invoke the body with the bound receiver.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0.body)(&self.receiver(), args)
    }

    /// Return a new callable whose receiver is `receiver`.
    ///
    /// Binding an already-bound callable yields a new callable that keeps
    /// the first receiver. The new callable starts with no own properties.
    ///
    /// # Errors
    ///
    /// Returns [`CallableError::NotBindable`] for host callables.
    pub fn bind(&self, receiver: &Value) -> Result<Callable, CallableError> {
        if !self.0.bindable {
            tracing::debug!(name = %self.0.name, "refusing to bind host callable");
            return Err(CallableError::NotBindable {
                name: self.0.name.to_string(),
            });
        }
        let receiver = match &self.0.receiver {
            Some(first) => first.clone(),
            None => Receiver::new(receiver),
        };
        Ok(Callable::build(
            Arc::from(format!("bound {}", self.0.name)),
            CallableKind::Bound,
            Arc::clone(&self.0.body),
            Some(receiver),
            true,
        ))
    }

    /// The callable's own property record.
    pub fn properties(&self) -> ContainerRef {
        ContainerRef::Record(self.0.properties.clone())
    }

    /// Set an own property.
    ///
    /// # Errors
    ///
    /// Fails when the callable's integrity level forbids the write.
    pub fn set_property(&self, name: &str, value: Value) -> Result<(), WriteError> {
        self.0.properties.write().write_at(Key::field(name), value)
    }

    pub fn integrity(&self) -> Integrity {
        self.0.properties.read().integrity()
    }

    pub fn restrict(&self, level: Integrity) {
        self.0.properties.write().restrict(level);
    }

    pub fn is_extensible(&self) -> bool {
        self.0.properties.read().is_extensible()
    }

    /// Functions always carry own properties (`length`, `name`), so the
    /// empty-object rule never reports them sealed or frozen early.
    pub fn is_sealed(&self) -> bool {
        self.integrity() >= Integrity::Sealed
    }

    pub fn is_frozen(&self) -> bool {
        self.integrity() == Integrity::Frozen
    }

    /// Whether both handles are the same callable.
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Whether both callables run the same body. Rebinding keeps the body.
    pub fn body_eq(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.0.body, &other.0.body)
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.0.name)
            .field("kind", &self.0.kind)
            .field("bound", &self.is_bound())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.0.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests unwrap writes that must succeed")]
mod tests;
