//! Deltas between flat state objects.

use schema::{QueryObject, Value};

/// The keys of one object whose values differ from another object.
pub type Delta = QueryObject;

/// Returns the keys of `current` whose values loosely differ from `comparison`.
///
/// Only keys of `current` are considered; a key missing from `comparison`
/// always differs. See [`Value::loose_eq`] for the comparison rules.
#[must_use]
pub fn get_delta(current: &QueryObject, comparison: &QueryObject) -> Delta {
    let mut delta = Delta::new();
    get_delta_into(current, comparison, &mut delta);
    delta
}

/// Like [`get_delta`], writing into a reusable output object.
///
/// `out` is cleared first.
pub fn get_delta_into(current: &QueryObject, comparison: &QueryObject, out: &mut Delta) {
    *out = Delta::new();
    for (key, value) in changed(current, comparison) {
        out.insert(key, value.clone());
    }
}

/// Returns `true` if [`get_delta`] would be non-empty.
#[must_use]
pub fn has_delta(current: &QueryObject, comparison: &QueryObject) -> bool {
    changed(current, comparison).next().is_some()
}

/// Returns a copy of `base` with values taken from `delta` where present.
///
/// The result has exactly the keys of `base`, in `base` order; extra keys
/// in `delta` are ignored.
#[must_use]
pub fn apply_delta(delta: &Delta, base: &QueryObject) -> QueryObject {
    let mut merged = QueryObject::with_capacity(base.len());
    for (key, value) in base.iter() {
        let value = delta.get(key).unwrap_or(value);
        merged.insert(key, value.clone());
    }
    merged
}

fn changed<'a>(
    current: &'a QueryObject,
    comparison: &'a QueryObject,
) -> impl Iterator<Item = (&'a str, &'a Value)> {
    current.iter().filter(move |(key, value)| {
        comparison
            .get(key)
            .map_or(true, |other| !value.loose_eq(other))
    })
}
