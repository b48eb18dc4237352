/// Property-based tests for the merge rule and the renderer.
///
/// Keys are drawn from a small alphabet so generated documents collide often;
/// otherwise most properties would only ever see disjoint tables.
///
/// Floats are left out of the render round-trip: integral floats come back as
/// integers by design.
use proptest::prelude::*;
use tomlmerge_core::{combine, merge_documents, parse, render, RenderOptions, Table, Value};

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("a".to_string()),
        Just("b".to_string()),
        Just("c".to_string()),
        Just("plugins".to_string()),
        Just("server".to_string()),
        "[a-z]{1,6}",
    ]
}

fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 _-]{0,12}",
        Just(String::new()),
        Just("say \"hi\"".to_string()),
        Just("path\\to\\file".to_string()),
        Just("line1\nline2".to_string()),
        Just("caf\u{00e9}".to_string()),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_string().prop_map(Value::String),
        any::<i64>().prop_map(Value::Integer),
        any::<bool>().prop_map(Value::Boolean),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => arb_scalar(),
        1 => prop::collection::vec(arb_scalar(), 0..4).prop_map(Value::Array),
    ]
}

/// Tables nested up to three levels, values are scalars, arrays or tables.
fn arb_table() -> impl Strategy<Value = Table> {
    let leaf = prop::collection::vec((arb_key(), arb_leaf()), 0..5)
        .prop_map(|pairs| pairs.into_iter().collect::<Table>());
    leaf.prop_recursive(3, 24, 5, |inner| {
        prop::collection::vec(
            (
                arb_key(),
                prop_oneof![
                    2 => arb_leaf(),
                    1 => inner.prop_map(Value::Table),
                ],
            ),
            0..5,
        )
        .prop_map(|pairs| pairs.into_iter().collect::<Table>())
    })
}

/// Walk `overlay` and check that `merged` agrees with it at every leaf.
fn overlay_leaves_win(merged: &Table, overlay: &Table) -> bool {
    overlay.iter().all(|(key, value)| match (merged.get(key), value) {
        (Some(Value::Table(m)), Value::Table(o)) => overlay_leaves_win(m, o),
        (Some(_), Value::Table(_)) => false,
        (Some(m), v) => m == v,
        (None, _) => false,
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn combine_is_associative(a in arb_table(), b in arb_table(), c in arb_table()) {
        let left = combine(combine(a.clone(), b.clone()), c.clone());
        let right = combine(a, combine(b, c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn empty_table_is_identity(a in arb_table()) {
        prop_assert_eq!(combine(Table::new(), a.clone()), a.clone());
        prop_assert_eq!(combine(a.clone(), Table::new()), a);
    }

    #[test]
    fn combine_is_idempotent(a in arb_table()) {
        prop_assert_eq!(combine(a.clone(), a.clone()), a);
    }

    #[test]
    fn overlay_wins_everywhere(a in arb_table(), b in arb_table()) {
        let merged = combine(a, b.clone());
        prop_assert!(overlay_leaves_win(&merged, &b));
    }

    #[test]
    fn result_has_union_of_keys(a in arb_table(), b in arb_table()) {
        let merged = combine(a.clone(), b.clone());
        for key in a.keys().chain(b.keys()) {
            prop_assert!(merged.contains_key(key));
        }
        prop_assert!(merged.keys().all(|k| a.contains_key(k) || b.contains_key(k)));
    }

    #[test]
    fn base_only_keys_untouched(a in arb_table(), b in arb_table()) {
        let merged = combine(a.clone(), b.clone());
        for (key, value) in &a {
            if !b.contains_key(key) {
                prop_assert_eq!(&merged[key], value);
            }
        }
    }

    #[test]
    fn fold_equals_nested_combine(a in arb_table(), b in arb_table(), c in arb_table()) {
        let folded = merge_documents(vec![
            Value::Table(a.clone()),
            Value::Table(b.clone()),
            Value::Table(c.clone()),
        ])
        .unwrap();
        prop_assert_eq!(folded, combine(combine(a, b), c));
    }

    #[test]
    fn render_roundtrips(a in arb_table()) {
        let text = render(&a, &RenderOptions::default()).unwrap();
        let back = parse(&text).unwrap();
        prop_assert_eq!(back, Value::Table(a), "rendered:\n{}", text);
    }
}
