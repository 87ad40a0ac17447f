//! Property tests for the merge laws of `resolve`

use proptest::prelude::*;
use serde_json::{Map, Value, json};
use storefront_settings::{OverrideSet, SettingsDocument, resolve};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z#0-9]{0,8}".prop_map(Value::from),
        prop::collection::vec("[a-z]{2}", 0..4).prop_map(|codes| json!(codes)),
    ]
}

fn namespace() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z]{1,6}", leaf(), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

fn document() -> impl Strategy<Value = Value> {
    (namespace(), namespace(), namespace()).prop_map(|(store, colors, analytics)| {
        json!({ "store": store, "colors": colors, "analytics": analytics })
    })
}

proptest! {
    #[test]
    fn empty_overrides_are_identity(raw in document()) {
        let doc = SettingsDocument::from_value(raw).unwrap();
        let model = resolve(&doc, &OverrideSet::new()).unwrap();
        prop_assert!(model == doc);
    }

    #[test]
    fn leaf_override_keeps_siblings(
        colors in namespace().prop_filter("needs a key", |m| !m.is_empty()),
        pick in any::<prop::sample::Index>(),
        value in leaf(),
    ) {
        let doc = SettingsDocument::from_value(
            json!({ "analytics": {}, "colors": colors.clone() })
        ).unwrap();
        let key = colors.keys().nth(pick.index(colors.len())).unwrap().clone();
        let overrides = OverrideSet::new().with(&format!("colors.{key}"), value.clone());

        let model = resolve(&doc, &overrides).unwrap();
        let merged = model.namespace("colors").unwrap();

        let expected = match (&colors[&key], &value) {
            (Value::String(_), Value::Number(_) | Value::Bool(_)) => Value::String(value.to_string()),
            _ => value.clone(),
        };
        prop_assert_eq!(merged.get(&key), Some(&expected));
        prop_assert_eq!(merged.len(), colors.len());
        for (sibling, original) in &colors {
            if sibling != &key {
                prop_assert_eq!(merged.get(sibling), Some(original));
            }
        }
    }

    #[test]
    fn overrides_never_add_keys(raw in document(), extra in namespace()) {
        let doc = SettingsDocument::from_value(raw).unwrap();
        let overrides = OverrideSet::from_value(json!({ "store": extra, "extra": { "flag": true } }))
            .unwrap();

        let model = resolve(&doc, &overrides).unwrap();

        prop_assert!(model.namespace("extra").is_none());
        let base_keys: Vec<_> = doc.namespace("store").unwrap().keys().collect();
        let merged_keys: Vec<_> = model.namespace("store").unwrap().keys().collect();
        prop_assert_eq!(base_keys, merged_keys);
    }
}
