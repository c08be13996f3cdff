//! Property tests over generated acyclic value trees.
//!
//! 1. Round-trip: `deep_copy(v) == v`
//! 2. Non-aliasing: no container of the copy is a container of the input
//! 3. Lock propagation: after `deep_freeze(v)` every object reports frozen
//! 4. Search completeness: every field name in the tree is found

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use strata_walk::{classify, deep_copy, deep_freeze, deep_has_frozen, deep_has_prop, Value};

// -- Strategies --

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        "[a-z]{0,6}".prop_map(Value::string),
    ]
}

fn tree_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::sequence),
            prop::collection::vec(("[a-z]{1,4}", inner.clone()), 0..6).prop_map(Value::record),
            prop::collection::vec((leaf_strategy(), inner.clone()), 0..6).prop_map(Value::map),
            prop::collection::vec(inner, 0..6).prop_map(Value::set),
        ]
    })
}

// -- Helpers --

/// Every non-primitive node reachable from `root`.
fn objects(root: &Value) -> Vec<Value> {
    let mut found = Vec::new();
    let mut pending = vec![root.clone()];
    while let Some(value) = pending.pop() {
        if value.is_primitive() {
            continue;
        }
        pending.extend(value.own_entries().into_iter().map(|(_, child)| child));
        found.push(value);
    }
    found
}

fn field_names(root: &Value) -> Vec<String> {
    objects(root)
        .iter()
        .filter(|value| value.is_record())
        .flat_map(|record| {
            record
                .own_entries()
                .into_iter()
                .map(|(key, _)| key.to_string())
        })
        .collect()
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn classification_is_idempotent(value in tree_strategy()) {
        prop_assert_eq!(classify(&value), classify(&value));
    }

    #[test]
    fn deep_copy_round_trips(value in tree_strategy()) {
        let copy = deep_copy(&value).unwrap();
        prop_assert_eq!(copy, value);
    }

    #[test]
    fn deep_copy_never_aliases(value in tree_strategy()) {
        let copy = deep_copy(&value).unwrap();
        let originals = objects(&value);
        let copies = objects(&copy);
        prop_assert_eq!(originals.len(), copies.len());
        for copied in &copies {
            prop_assert!(originals.iter().all(|original| !original.same_allocation(copied)));
        }
    }

    #[test]
    fn deep_freeze_reaches_every_object(value in tree_strategy()) {
        deep_freeze(&value).unwrap();
        for object in objects(&value) {
            prop_assert!(object.is_frozen());
        }
        prop_assert_eq!(deep_has_frozen(&value), !value.is_primitive());
    }

    #[test]
    fn deep_has_prop_finds_every_field(value in tree_strategy()) {
        for name in field_names(&value) {
            prop_assert!(deep_has_prop(&value, &name));
        }
    }
}
