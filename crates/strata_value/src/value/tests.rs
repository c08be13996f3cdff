use pretty_assertions::assert_eq;

use super::*;
use crate::{Container, ValueClass};

#[test]
fn test_oracle() {
    assert!(Value::Null.is_primitive());
    assert!(Value::Undefined.is_nullish());
    assert!(Value::Float(1.5).is_number());
    assert!(!Value::function("f", |_, _| Value::Null).is_object());
    assert!(Value::opaque("Date", "0").is_object());
    assert!(!Value::opaque("Date", "0").is_container());
    assert!(Value::map([]).is_container());
    assert!(!Value::string("s").is_object());
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", Value::Int(42)), "42");
    assert_eq!(format!("{}", Value::Float(1.0)), "1");
    assert_eq!(format!("{}", Value::string("hello")), "\"hello\"");
    let nested = Value::record([
        ("a", Value::sequence([Value::Int(1), Value::Null])),
        ("m", Value::map([(Value::string("k"), Value::Bool(true))])),
    ]);
    assert_eq!(nested.to_string(), "{a: [1, null], m: Map {\"k\" => true}}");
    assert_eq!(Value::set([Value::Int(1)]).to_string(), "Set {1}");
    assert_eq!(Value::opaque("Date", "2020").to_string(), "<Date 2020>");
}

#[test]
fn test_property_keys() {
    assert_eq!(Value::Float(f64::NAN).to_property_key(), "NaN");
    assert_eq!(Value::Float(f64::NEG_INFINITY).to_property_key(), "-Infinity");
    assert_eq!(Value::Float(-0.0).to_property_key(), "0");
    assert_eq!(Value::Float(2.5).to_property_key(), "2.5");
    assert_eq!(Value::Float(3.0).to_property_key(), "3");
    assert_eq!(Value::record_empty().to_property_key(), "[object Object]");
    assert_eq!(
        Value::sequence([Value::Int(1), Value::Undefined, Value::string("x")]).to_property_key(),
        "1,,x"
    );
}

#[test]
fn test_structural_equality() {
    assert_eq!(Value::Int(1), Value::Float(1.0));
    assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    assert_ne!(Value::Null, Value::Undefined);
    assert_eq!(
        Value::sequence([Value::record([("a", Value::Int(1))])]),
        Value::sequence([Value::record([("a", Value::Int(1))])])
    );
    assert_eq!(Value::opaque("RegExp", "/a/"), Value::opaque("RegExp", "/a/"));
}

#[test]
fn test_callables_equal_by_body() {
    let Value::Callable(f) = Value::function("f", |_, _| Value::Null) else {
        panic!("function factory builds callables");
    };
    let bound = f.bind(&Value::Null).unwrap();
    assert_eq!(Value::Callable(f.clone()), Value::Callable(bound));
    assert_ne!(
        Value::Callable(f),
        Value::function("f", |_, _| Value::Null)
    );
}

#[test]
fn test_same_value_zero_vs_identity() {
    let a = Value::record_empty();
    assert!(a.same_allocation(&a.clone()));
    assert!(!a.same_allocation(&Value::record_empty()));
    assert!(!Value::Int(1).same_allocation(&Value::Int(1)));
    assert!(Value::Int(1).same_value_zero(&Value::Int(1)));
    assert!(Value::Float(f64::NAN).same_value_zero(&Value::Float(f64::NAN)));
    assert!(Value::Float(-0.0).same_value_zero(&Value::Int(0)));
}

#[test]
fn test_own_entries() {
    let chars = Value::string("ab").own_entries();
    assert_eq!(
        chars,
        vec![
            (Key::Index(0), Value::string("a")),
            (Key::Index(1), Value::string("b"))
        ]
    );
    assert!(Value::string("ab").has_own_property("1"));
    assert!(!Value::string("ab").has_own_property("2"));
    assert!(Value::Int(5).own_entries().is_empty());
    assert!(Value::opaque("Date", "0").own_entries().is_empty());

    let Value::Callable(f) = Value::function("f", |_, _| Value::Null) else {
        panic!("function factory builds callables");
    };
    f.set_property("tag", Value::Int(1)).unwrap();
    let f = Value::Callable(f);
    assert!(f.has_own_property("tag"));
    assert_eq!(f.own_len(), 1);
}

#[test]
fn test_primitives_report_frozen() {
    for value in [Value::Null, Value::Int(1), Value::string("s")] {
        assert!(value.is_frozen());
        assert!(value.is_sealed());
        assert!(!value.is_extensible());
        value.restrict(Integrity::Frozen);
    }
}

#[test]
fn test_restrict_through_any_handle() {
    let record = Value::record([("a", Value::Int(1))]);
    let alias = record.clone();
    alias.restrict(Integrity::Sealed);
    assert!(record.is_sealed());
    assert!(!record.is_frozen());

    let opaque = Value::opaque("Promise", "pending");
    assert!(opaque.is_extensible());
    opaque.restrict(Integrity::NonExtensible);
    assert!(opaque.is_frozen());
}

#[test]
fn test_instance_of() {
    let seq = Value::sequence_empty();
    assert!(seq.is_instance_of(&ValueClass::Array));
    assert!(seq.is_instance_of(&ValueClass::Object));
    assert!(!seq.is_instance_of(&ValueClass::Map));
    assert!(!Value::Int(1).is_instance_of(&ValueClass::Object));
    assert!(Value::opaque("Date", "0").is_instance_of(&ValueClass::named("Date")));
    assert!(Value::function("f", |_, _| Value::Null).is_instance_of(&ValueClass::Function));
    assert!(Value::set([]).is_instance_of(&ValueClass::named("Set")));
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Undefined.type_name(), "undefined");
    assert_eq!(Value::Float(0.5).type_name(), "number");
    assert_eq!(Value::sequence_empty().type_name(), "Array");
    assert_eq!(Value::opaque("Date", "0").type_name(), "Date");
}

#[test]
fn test_deep_nesting_compares_and_prints() {
    fn nest(depth: usize) -> Value {
        let mut value = Value::Int(0);
        for _ in 0..depth {
            value = Value::sequence([value]);
        }
        value
    }

    // Dropping the chain recursively would overflow; unwind it level by level.
    fn unnest(mut value: Value) {
        while let Value::Sequence(items) = value {
            value = items
                .write()
                .remove(&Key::Index(0))
                .ok()
                .flatten()
                .unwrap_or_default();
        }
    }

    let a = nest(50_000);
    let b = nest(50_000);
    assert!(a == b);
    assert!(a.to_string().starts_with("[[[["));
    unnest(a);
    unnest(b);
}

#[test]
fn test_container_trait_object_access() {
    let Value::Record(record) = Value::record([("a", Value::Int(1))]) else {
        panic!("record factory builds records");
    };
    let guard = record.read();
    let container: &dyn Container = &*guard;
    assert_eq!(container.len(), 1);
}
