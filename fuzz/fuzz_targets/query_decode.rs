#![no_main]

use codec::{apply_delta, decode_query, encode_query, get_delta};
use libfuzzer_sys::fuzz_target;
use schema::{QueryObject, Schema, Value, ValueKind};

fn defaults() -> QueryObject {
    QueryObject::from_iter([
        ("n", Value::Number(1.0)),
        ("b", Value::Bool(false)),
        ("s", Value::from("x")),
    ])
}

fuzz_target!(|data: &[u8]| {
    let Ok(query) = std::str::from_utf8(data) else {
        return;
    };

    let untyped = decode_query(query, &Schema::empty());
    for (_, value) in untyped.iter() {
        assert_eq!(value.kind(), ValueKind::String);
    }

    let base = defaults();
    let typed = decode_query(query, &Schema::from_object(&base));
    let state = apply_delta(&typed, &base);
    assert_eq!(state.len(), base.len());

    let delta = get_delta(&state, &base);
    let _ = decode_query(&encode_query(&delta), &Schema::from_object(&base));
});
