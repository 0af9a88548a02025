use proptest::prelude::*;
use wire::{decode_component, decode_param_set, encode_component, encode_param_set, ParamSet};

fn param_set_strategy() -> impl Strategy<Value = ParamSet> {
    prop::collection::btree_map(
        any::<String>(),
        prop::collection::vec(any::<String>(), 1..4),
        0..8,
    )
    .prop_map(|map| {
        let mut params = ParamSet::new();
        for (key, values) in map {
            params.insert(key, values);
        }
        params
    })
}

proptest! {
    #[test]
    fn prop_component_roundtrip(s in any::<String>()) {
        let encoded = encode_component(&s);
        prop_assert_eq!(decode_component(&encoded), s.as_str());
    }

    #[test]
    fn prop_encoded_component_has_no_separators(s in any::<String>()) {
        let encoded = encode_component(&s);
        prop_assert!(!encoded.contains('&'));
        prop_assert!(!encoded.contains('='));
    }

    #[test]
    fn prop_param_set_roundtrip(params in param_set_strategy()) {
        let query = encode_param_set(Some(&params));
        prop_assert_eq!(decode_param_set(&query), params);
    }

    #[test]
    fn prop_decode_is_total(query in any::<String>()) {
        let params = decode_param_set(&query);
        // Whatever was accepted encodes and decodes back to itself.
        let again = decode_param_set(&encode_param_set(Some(&params)));
        prop_assert_eq!(again, params);
    }
}
