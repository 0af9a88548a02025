//! Splitting and joining `key=value&key=value` query strings.

use std::borrow::Cow;
use std::str::Split;

use crate::component::{decode_component, encode_component};

/// Iterator over the decoded `(key, value)` pairs of a query string.
///
/// Segments are separated by `&`. Within a segment only the text before the
/// first `=` (key) and between the first and second `=` (value) is used;
/// segments without any `=` are skipped.
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    segments: Split<'a, char>,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (Cow<'a, str>, Cow<'a, str>);

    fn next(&mut self) -> Option<Self::Item> {
        for segment in self.segments.by_ref() {
            let mut parts = segment.split('=');
            let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
                continue;
            };
            return Some((decode_component(key), decode_component(value)));
        }
        None
    }
}

/// Parses a query string (without the leading `?`) into decoded pairs.
///
/// Never fails: malformed segments are dropped.
#[must_use]
pub fn parse_pairs(query: &str) -> Pairs<'_> {
    Pairs {
        segments: query.split('&'),
    }
}

/// Writes one encoded `key=value` pair, preceded by `&` when `out` is non-empty.
pub fn push_pair(out: &mut String, key: &str, value: &str) {
    if !out.is_empty() {
        out.push('&');
    }
    out.push_str(&encode_component(key));
    out.push('=');
    out.push_str(&encode_component(value));
}
