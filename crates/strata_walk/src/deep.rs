//! Deep operations, each a set of walker hooks.
//!
//! None of these contain traversal logic. Copying configures
//! [`CopyHooks`]; locking configures [`LockHooks`]; the searches are
//! [`ContainerPredicate`]s. To apply [`WalkConfig`](crate::WalkConfig)
//! limits, hand the same hooks to a configured [`Walker`](crate::Walker).

use strata_value::{Callable, ContainerRef, Integrity, Key, Value, ValueClass};

use crate::error::WalkResult;
use crate::walker::{exists, walk, ContainerPredicate, WalkHooks};

/// Copy hooks: allocate a fresh container per input container, rebind
/// callables to their new parent, and pass every leaf through `transform`.
pub struct CopyHooks<F> {
    transform: F,
}

impl<F> CopyHooks<F>
where
    F: FnMut(Value, &Key, &ContainerRef) -> Value,
{
    pub fn new(transform: F) -> Self {
        CopyHooks { transform }
    }
}

impl<F> WalkHooks for CopyHooks<F>
where
    F: FnMut(Value, &Key, &ContainerRef) -> Value,
{
    fn on_scalar(&mut self, value: &Value, key: &Key, container: &ContainerRef) -> WalkResult<()> {
        let value = (self.transform)(value.clone(), key, container);
        container.write_at(key.clone(), value)?;
        Ok(())
    }

    fn on_callable(
        &mut self,
        callable: &Callable,
        key: &Key,
        container: &ContainerRef,
    ) -> WalkResult<()> {
        let bound = callable.bind(&container.to_value())?;
        let value = (self.transform)(Value::Callable(bound), key, container);
        container.write_at(key.clone(), value)?;
        Ok(())
    }

    fn on_container(
        &mut self,
        node: &ContainerRef,
        key: &Key,
        container: &ContainerRef,
    ) -> WalkResult<Option<ContainerRef>> {
        let output = node.empty_like();
        container.write_at(key.clone(), output.to_value())?;
        Ok(Some(output))
    }

    fn on_unclassified(
        &mut self,
        _value: &Value,
        key: &Key,
        container: &ContainerRef,
    ) -> WalkResult<()> {
        container.write_at(key.clone(), Value::record_empty())?;
        Ok(())
    }
}

/// Lock hooks: raise every reachable object to `level`, in place.
#[derive(Clone, Copy, Debug)]
pub struct LockHooks {
    level: Integrity,
}

impl LockHooks {
    pub fn new(level: Integrity) -> Self {
        LockHooks { level }
    }
}

impl WalkHooks for LockHooks {
    fn on_callable(&mut self, callable: &Callable, _key: &Key, _container: &ContainerRef) -> WalkResult<()> {
        callable.restrict(self.level);
        Ok(())
    }

    fn on_container(
        &mut self,
        node: &ContainerRef,
        _key: &Key,
        _container: &ContainerRef,
    ) -> WalkResult<Option<ContainerRef>> {
        node.restrict(self.level);
        Ok(None)
    }

    fn on_unclassified(&mut self, value: &Value, _key: &Key, _container: &ContainerRef) -> WalkResult<()> {
        value.restrict(self.level);
        Ok(())
    }
}

/// Deep copy of `value`.
///
/// Every container in the result is a fresh allocation mirroring the input
/// shape and order. Map keys are carried over by handle. Callables are
/// rebound to the container they land in (a root callable is bound to the
/// walk's sentinel, which is gone once the copy returns). Opaque values
/// become empty records.
///
/// # Errors
///
/// Fails when a callable refuses to bind.
pub fn deep_copy(value: &Value) -> WalkResult<Value> {
    deep_copy_with(value, |value, _, _| value)
}

/// Deep copy of `value`, passing every leaf and rebound callable through
/// `transform(value, key, parent)` before it is written.
///
/// # Errors
///
/// Fails when a callable refuses to bind or a transformed value cannot be
/// written.
pub fn deep_copy_with<F>(value: &Value, transform: F) -> WalkResult<Value>
where
    F: FnMut(Value, &Key, &ContainerRef) -> Value,
{
    walk(value, &mut CopyHooks::new(transform))
}

fn deep_lock(value: &Value, level: Integrity) -> WalkResult<()> {
    tracing::trace!(%level, "deep lock");
    walk(value, &mut LockHooks::new(level))?;
    Ok(())
}

/// Freeze every reachable container, callable and opaque value.
pub fn deep_freeze(value: &Value) -> WalkResult<()> {
    deep_lock(value, Integrity::Frozen)
}

/// Seal every reachable container, callable and opaque value.
pub fn deep_seal(value: &Value) -> WalkResult<()> {
    deep_lock(value, Integrity::Sealed)
}

/// Make every reachable container, callable and opaque value
/// non-extensible.
pub fn deep_prevent_extensions(value: &Value) -> WalkResult<()> {
    deep_lock(value, Integrity::NonExtensible)
}

/// Whether any reachable object has an own property `name`.
pub fn deep_has_prop(value: &Value, name: &str) -> bool {
    exists(
        value,
        &mut ContainerPredicate::new(|node: &Value| node.has_own_property(name)),
    )
}

/// Whether any reachable object reports frozen.
pub fn deep_has_frozen(value: &Value) -> bool {
    exists(value, &mut ContainerPredicate::new(Value::is_frozen))
}

/// Whether any reachable object reports sealed.
pub fn deep_has_sealed(value: &Value) -> bool {
    exists(value, &mut ContainerPredicate::new(Value::is_sealed))
}

/// Whether no reachable object is non-extensible.
///
/// Vacuously true for primitives.
pub fn deep_has_extensible(value: &Value) -> bool {
    !exists(
        value,
        &mut ContainerPredicate::new(|node: &Value| !node.is_extensible()),
    )
}

/// Whether any reachable object is an instance of `class`.
pub fn deep_has_instance_of(value: &Value, class: &ValueClass) -> bool {
    exists(
        value,
        &mut ContainerPredicate::new(|node: &Value| node.is_instance_of(class)),
    )
}
