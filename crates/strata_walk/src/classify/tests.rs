use super::*;

#[test]
fn test_primitives_are_not_objects() {
    for value in [
        Value::Undefined,
        Value::Null,
        Value::Bool(false),
        Value::Int(0),
        Value::Float(f64::NAN),
        Value::string(""),
    ] {
        assert_eq!(classify(&value), Category::NotObject, "{value:?}");
    }
}

#[test]
fn test_object_categories() {
    assert_eq!(
        classify(&Value::function("f", |_, _| Value::Null)),
        Category::Callable
    );
    assert_eq!(classify(&Value::record_empty()), Category::Record);
    assert_eq!(classify(&Value::sequence_empty()), Category::Sequence);
    assert_eq!(classify(&Value::map([])), Category::AssocOrSet);
    assert_eq!(classify(&Value::set([])), Category::AssocOrSet);
    assert_eq!(
        classify(&Value::opaque("RegExp", "/x/")),
        Category::Unclassified
    );
}

#[test]
fn test_classification_is_idempotent() {
    let value = Value::record([("a", Value::sequence([Value::Int(1)]))]);
    let first = classify(&value);
    assert_eq!(classify(&value), first);
    assert!(first.is_container());
    assert!(first.is_object());
    assert!(!Category::Unclassified.is_container());
    assert!(!Category::NotObject.is_object());
}
