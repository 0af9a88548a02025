//! Single-valued query string encoding/decoding.

use schema::{QueryObject, Schema};
use wire::{parse_pairs, push_pair};

/// Encodes every key of `object`, in insertion order, as `key=value`.
#[must_use]
pub fn encode_query(object: &QueryObject) -> String {
    let mut out = String::new();
    for (key, value) in object.iter() {
        push_pair(&mut out, key, &value.to_string());
    }
    out
}

/// Decodes a query string into typed values.
///
/// Keys known to `schema` are coerced to their declared kind; unknown keys
/// are kept as raw strings. A key that repeats keeps its first position and
/// its last value. Malformed segments are dropped.
#[must_use]
pub fn decode_query(query: &str, schema: &Schema) -> QueryObject {
    let mut object = QueryObject::new();
    for (key, raw) in parse_pairs(query) {
        let value = schema.coerce(&key, &raw);
        object.insert(key, value);
    }
    object
}
