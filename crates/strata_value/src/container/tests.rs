use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_new_allocates_empty_extensible() {
    for kind in [
        ContainerKind::Record,
        ContainerKind::Sequence,
        ContainerKind::Map,
        ContainerKind::Set,
    ] {
        let container = ContainerRef::new(kind);
        assert_eq!(container.kind(), kind);
        assert!(container.is_empty());
        assert!(container.is_extensible());
    }
}

#[test]
fn test_from_value_shares_allocation() {
    let value = Value::record([("a", Value::Int(1))]);
    let Some(container) = ContainerRef::from_value(&value) else {
        panic!("records are containers");
    };
    container.write_at(Key::field("b"), Value::Int(2)).unwrap();
    assert_eq!(value, Value::record([("a", Value::Int(1)), ("b", Value::Int(2))]));
    assert!(container.to_value().same_allocation(&value));
}

#[test]
fn test_from_value_rejects_non_containers() {
    assert!(ContainerRef::from_value(&Value::Int(1)).is_none());
    assert!(ContainerRef::from_value(&Value::opaque("Date", "0")).is_none());
    assert!(ContainerRef::from_value(&Value::function("f", |_, _| Value::Null)).is_none());
}

#[test]
fn test_empty_like_is_fresh() {
    let original = ContainerRef::from_value(&Value::set([Value::Int(1)]));
    let Some(original) = original else {
        panic!("sets are containers");
    };
    let empty = original.empty_like();
    assert_eq!(empty.kind(), ContainerKind::Set);
    assert!(empty.is_empty());
    assert!(!empty.same_allocation(&original));
}

#[test]
fn test_detached_copy_is_one_level() {
    let inner = Value::sequence([Value::Int(1)]);
    let outer = ContainerRef::new(ContainerKind::Record);
    outer.write_at(Key::field("inner"), inner.clone()).unwrap();
    outer.restrict(Integrity::Frozen);

    let copy = outer.detached_copy();
    assert!(!copy.same_allocation(&outer));
    assert!(copy.is_extensible());
    let Some(copied_inner) = copy.get(&Key::field("inner")) else {
        panic!("field carried over");
    };
    assert!(copied_inner.same_allocation(&inner));
}

#[test]
fn test_snapshot_allows_writes_while_iterating() {
    let container = ContainerRef::new(ContainerKind::Sequence);
    container.write_at(Key::Index(0), Value::Int(1)).unwrap();
    for (key, value) in container.entries() {
        container.write_at(key, value).unwrap();
        container.write_at(Key::Index(1), Value::Int(2)).unwrap();
    }
    assert_eq!(container.len(), 2);
}

#[test]
fn test_empty_non_extensible_reports_sealed_and_frozen() {
    let container = ContainerRef::new(ContainerKind::Map);
    container.restrict(Integrity::NonExtensible);
    assert!(container.is_sealed());
    assert!(container.is_frozen());

    let full = ContainerRef::from_value(&Value::map([(Value::Null, Value::Null)]));
    let Some(full) = full else {
        panic!("maps are containers");
    };
    full.restrict(Integrity::NonExtensible);
    assert!(!full.is_sealed());
    assert!(!full.is_frozen());
}

#[test]
fn test_restrict_never_lowers() {
    let container = ContainerRef::new(ContainerKind::Record);
    container.restrict(Integrity::Frozen);
    container.restrict(Integrity::Sealed);
    assert_eq!(container.integrity(), Integrity::Frozen);
}

#[test]
fn test_structural_equality() {
    let a = Value::record([("x", Value::Int(1)), ("y", Value::sequence([Value::Null]))]);
    let b = Value::record([("y", Value::sequence([Value::Null])), ("x", Value::Int(1))]);
    let c = Value::sequence([Value::Int(1), Value::Int(2)]);
    let d = Value::sequence([Value::Int(2), Value::Int(1)]);
    assert_eq!(a, b);
    assert_ne!(c, d);
    assert_ne!(a, c);
}

#[test]
fn test_record_equality_compares_fields_by_name() {
    let record = |x: i64| Value::record([("x", Value::Int(x)), ("y", Value::Null)]);
    let (Some(a), Some(b), Some(c)) = (
        record(1).as_container(),
        record(1).as_container(),
        record(2).as_container(),
    ) else {
        panic!("records are containers");
    };
    assert!(a.structurally_equals(&b));
    assert!(!a.structurally_equals(&c));
    let renamed = Value::record([("x", Value::Int(1)), ("z", Value::Null)]);
    assert!(!a.structurally_equals(&renamed.as_container().unwrap()));
}

#[test]
fn test_kind_display() {
    assert_eq!(ContainerKind::Sequence.to_string(), "sequence");
    assert_eq!(ContainerKind::Map.to_string(), "map");
}
