//! Multi-valued query parameters.

use std::collections::BTreeMap;

use crate::pairs::{parse_pairs, push_pair};

/// A key → ordered list of values mapping, written as repeated query keys.
///
/// Keys are kept sorted, which is also the order they are encoded in. The
/// order of values under one key is significant and preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParamSet {
    params: BTreeMap<String, Vec<String>>,
}

impl ParamSet {
    /// Creates an empty param set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            params: BTreeMap::new(),
        }
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the values stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.params.get(key).map(Vec::as_slice)
    }

    /// Replaces all values under `key`, returning the previous values.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        self.params.insert(key.into(), values)
    }

    /// Appends one value under `key`, creating the key if needed.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.entry(key.into()).or_default().push(value.into());
    }

    /// Removes a key and its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.params.remove(key)
    }

    /// Iterates keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Iterates `(key, values)` in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.append(key, value);
        }
        set
    }
}

/// Encodes a param set as `a=2&a=4&b=3`.
///
/// `None` encodes to the empty string.
#[must_use]
pub fn encode_param_set(params: Option<&ParamSet>) -> String {
    let mut out = String::new();
    let Some(params) = params else {
        return out;
    };
    for (key, values) in params.iter() {
        for value in values {
            push_pair(&mut out, key, value);
        }
    }
    out
}

/// Decodes a query string into a param set.
///
/// Repeated keys collect their values in the order encountered. Malformed
/// segments are dropped; the empty string decodes to an empty set.
#[must_use]
pub fn decode_param_set(query: &str) -> ParamSet {
    let mut params = ParamSet::new();
    for (key, value) in parse_pairs(query) {
        params.append(key, value);
    }
    params
}
