//! Typed query-string codec and state delta engine for sk.
//!
//! This crate ties together schema and wire to move flat state objects in
//! and out of URLs.
//!
//! # Features
//!
//! - Single-valued query encoding in key insertion order
//! - Schema-guided decoding (bool, number, string, raw)
//! - Minimal deltas between state snapshots, and re-applying them
//!
//! # Design Principles
//!
//! - **Total functions** - Nothing here fails; malformed input decodes to less state.
//! - **Minimal URLs** - Only keys that differ from the defaults are written.
//! - **Deterministic** - Same inputs produce same outputs.

mod delta;
mod query;

pub use delta::{apply_delta, get_delta, get_delta_into, has_delta, Delta};
pub use query::{decode_query, encode_query};
pub use schema::{QueryObject, Schema, Value, ValueKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = encode_query(&QueryObject::new());
        let _ = decode_query("", &Schema::empty());
        let _: Delta = get_delta(&QueryObject::new(), &QueryObject::new());
        let _ = apply_delta(&Delta::new(), &QueryObject::new());
    }

    #[test]
    fn only_non_default_keys_reach_the_url() {
        let defaults = QueryObject::from_iter([
            ("zoom", Value::Number(1.0)),
            ("mode", Value::from("grid")),
        ]);
        let mut state = defaults.clone();
        state.insert("zoom", 4);

        let query = encode_query(&get_delta(&state, &defaults));
        assert_eq!(query, "zoom=4");

        let restored = apply_delta(&decode_query(&query, &Schema::from_object(&defaults)), &defaults);
        assert_eq!(restored, state);
    }
}
