//! One-level operations and container conversions.

use std::sync::Arc;

use strata_value::{ContainerKind, ContainerRef, Key, Value, ValueClass};

use crate::error::WalkResult;

/// One-level copy of `value`.
///
/// Primitives are returned as-is, callables are bound to `context`,
/// containers are copied one level deep (children shared), and opaque
/// values become empty records.
///
/// # Errors
///
/// Fails when a callable refuses to bind.
pub fn copy(value: &Value, context: &Value) -> WalkResult<Value> {
    Ok(match value {
        Value::Callable(callable) => Value::Callable(callable.bind(context)?),
        Value::Opaque(_) => Value::record_empty(),
        other => match other.as_container() {
            Some(container) => container.detached_copy().to_value(),
            None => other.clone(),
        },
    })
}

/// Whether `value` has an own property `name`.
pub fn has_prop(value: &Value, name: &str) -> bool {
    value.has_own_property(name)
}

pub fn has_instance_of(value: &Value, class: &ValueClass) -> bool {
    value.is_instance_of(class)
}

/// Number of own entries.
pub fn size(value: &Value) -> usize {
    value.own_len()
}

/// Own entries with keys coerced to field names, as seen through
/// [`to_record`].
pub fn entries(value: &Value) -> Vec<(Key, Value)> {
    match to_record(value, |value, _| value) {
        Value::Record(record) => record
            .read()
            .fields()
            .map(|(name, value)| (Key::field(name), value.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

fn field_name(key: &Key) -> Arc<str> {
    match key {
        Key::Field(name) => Arc::clone(name),
        other => Arc::from(other.property_name().as_ref()),
    }
}

/// `{k, v}` record used where a keyed entry lands in an unkeyed container.
fn pair_record(key: Key, value: Value) -> Value {
    Value::record([("k", key.into_value()), ("v", value)])
}

/// Whether entries of `value` carry meaningful keys.
fn is_keyed(value: &Value) -> bool {
    value.is_record() || value.is_map()
}

/// New record from the own entries of `value`, mapping each value through
/// `f(value, key)`. Keys become field names; a later entry whose name
/// collides with an earlier one wins.
pub fn to_record<F>(value: &Value, mut f: F) -> Value
where
    F: FnMut(Value, &Key) -> Value,
{
    Value::record(value.own_entries().into_iter().map(|(key, child)| {
        let mapped = f(child, &key);
        (field_name(&key), mapped)
    }))
}

/// New map from the own entries of `value`, mapping each value through
/// `f(value, key)`. Field names become string keys, positions become
/// integer keys, map keys carry over by handle.
pub fn to_map<F>(value: &Value, mut f: F) -> Value
where
    F: FnMut(Value, &Key) -> Value,
{
    Value::map(value.own_entries().into_iter().map(|(key, child)| {
        let mapped = f(child, &key);
        (key.into_value(), mapped)
    }))
}

/// New set from the own entries of `value`, mapping each value through
/// `f(value, key)`. Entries of records and maps are added as `{k, v}`
/// records; other entries are added as the mapped value.
pub fn to_set<F>(value: &Value, mut f: F) -> Value
where
    F: FnMut(Value, &Key) -> Value,
{
    let keyed = is_keyed(value);
    Value::set(value.own_entries().into_iter().map(|(key, child)| {
        let mapped = f(child, &key);
        if keyed {
            pair_record(key, mapped)
        } else {
            mapped
        }
    }))
}

/// Copy `target` one level, then merge each source into the copy.
///
/// Maps take entries by key. Sets and sequences append, wrapping entries of
/// keyed sources (records and maps) as `{k, v}` records. Records and
/// callables take entries as fields. A primitive source is a single entry
/// keyed by its own property name. Primitive targets are returned as-is.
///
/// # Errors
///
/// Fails when a callable target refuses to bind or rejects a property.
pub fn assign(target: &Value, sources: &[Value]) -> WalkResult<Value> {
    let merged = copy(target, &Value::Undefined)?;

    for source in sources {
        let entries = if source.is_primitive() {
            vec![(Key::field(source.to_property_key().as_ref()), source.clone())]
        } else {
            source.own_entries()
        };
        let keyed = is_keyed(source);

        for (key, value) in entries {
            if let Some(container) = merged.as_container() {
                match container.kind() {
                    ContainerKind::Map | ContainerKind::Record => container.write_at(key, value)?,
                    ContainerKind::Set | ContainerKind::Sequence => {
                        let value = if keyed { pair_record(key, value) } else { value };
                        append(&container, value)?;
                    }
                }
            } else if let Value::Callable(callable) = &merged {
                callable.set_property(&key.property_name(), value)?;
            }
        }
    }
    Ok(merged)
}

fn append(container: &ContainerRef, value: Value) -> WalkResult<()> {
    container.write_at(Key::Index(container.len()), value)?;
    Ok(())
}
