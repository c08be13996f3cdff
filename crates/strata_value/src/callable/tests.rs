use pretty_assertions::assert_eq;

use super::*;

fn receiver_echo(name: &str) -> Callable {
    Callable::function(name, |receiver, _| receiver.clone())
}

#[test]
fn test_unbound_call_sees_undefined() {
    let f = receiver_echo("f");
    assert!(!f.is_bound());
    assert_eq!(f.call(&[]), Value::Undefined);
}

#[test]
fn test_call_passes_arguments() {
    let add = Callable::function("add", |_, args| {
        Value::Int(args.iter().filter_map(Value::as_int).sum())
    });
    assert_eq!(add.call(&[Value::Int(2), Value::Int(3)]), Value::Int(5));
}

#[test]
fn test_bind_sets_receiver() {
    let target = Value::record([("n", Value::Int(1))]);
    let bound = receiver_echo("f").bind(&target).unwrap();
    assert_eq!(bound.kind(), CallableKind::Bound);
    assert_eq!(bound.name(), "bound f");
    assert!(bound.call(&[]).same_allocation(&target));
}

#[test]
fn test_rebinding_keeps_first_receiver() {
    let first = Value::Int(1);
    let bound = receiver_echo("f").bind(&first).unwrap();
    let rebound = bound.bind(&Value::Int(2)).unwrap();
    assert!(!rebound.ptr_eq(&bound));
    assert_eq!(rebound.call(&[]), Value::Int(1));
}

#[test]
fn test_bind_shares_body() {
    let f = receiver_echo("f");
    let bound = f.bind(&Value::Null).unwrap();
    assert!(f.body_eq(&bound));
    assert!(!f.ptr_eq(&bound));
    assert!(!f.body_eq(&receiver_echo("f")));
}

#[test]
fn test_native_refuses_bind() {
    let native = Callable::native("print", |_, _| Value::Undefined);
    assert!(!native.is_bindable());
    assert_eq!(
        native.bind(&Value::Null).map(|c| c.name().to_owned()),
        Err(CallableError::NotBindable {
            name: "print".to_owned()
        })
    );
}

#[test]
fn test_dropped_receiver_resolves_undefined() {
    let target = Value::record_empty();
    let bound = receiver_echo("f").bind(&target).unwrap();
    drop(target);
    assert_eq!(bound.receiver(), Value::Undefined);
}

#[test]
fn test_bound_callable_stored_in_its_receiver() {
    let holder = Value::record_empty();
    let bound = receiver_echo("f").bind(&holder).unwrap();
    let Some(container) = holder.as_container() else {
        panic!("records are containers");
    };
    container.write_at(Key::field("f"), Value::Callable(bound.clone())).unwrap();
    assert!(bound.receiver().same_allocation(&holder));
}

#[test]
fn test_properties_and_integrity() {
    let f = receiver_echo("f");
    f.set_property("meta", Value::Int(1)).unwrap();
    assert!(f.properties().has_property("meta"));
    assert!(f.is_extensible());

    f.restrict(Integrity::Frozen);
    assert!(f.is_frozen());
    assert!(f.set_property("meta", Value::Int(2)).is_err());
    assert!(f.set_property("other", Value::Int(2)).is_err());
}

#[test]
fn test_non_extensible_callable_is_neither_sealed_nor_frozen() {
    let f = receiver_echo("f");
    f.restrict(Integrity::NonExtensible);
    assert!(!f.is_extensible());
    assert!(!f.is_sealed());
    assert!(!f.is_frozen());
    assert!(!Value::Callable(f.clone()).is_frozen());
}

#[test]
fn test_sealed_callable_is_not_frozen() {
    let f = receiver_echo("f");
    f.restrict(Integrity::Sealed);
    assert!(f.is_sealed());
    assert!(!f.is_frozen());
    f.restrict(Integrity::Frozen);
    assert!(f.is_frozen());
}

#[test]
fn test_display() {
    assert_eq!(receiver_echo("go").to_string(), "<function go>");
}
