//! One-shot conversions between JSON and query strings.

use anyhow::{Context, Result};
use codec::{apply_delta, decode_query, encode_query, get_delta, QueryObject, Schema};
use wire::{decode_param_set, encode_param_set, ParamSet};

/// Parses a JSON object of scalars into a query object, keeping key order.
pub fn parse_object(json: &str) -> Result<QueryObject> {
    serde_json::from_str(json).context("parse state json (expected an object of scalars)")
}

/// Parses a JSON object of string arrays into a param set.
pub fn parse_param_set(json: &str) -> Result<ParamSet> {
    serde_json::from_str(json).context("parse paramset json (expected an object of string arrays)")
}

/// Encodes a JSON param set as a query string.
pub fn params_encode(json: &str) -> Result<String> {
    let params = parse_param_set(json)?;
    Ok(encode_param_set(Some(&params)))
}

/// Decodes a query string into a pretty-printed JSON param set.
pub fn params_decode(query: &str) -> Result<String> {
    let params = decode_param_set(query);
    serde_json::to_string_pretty(&params).context("serialize paramset json")
}

/// Encodes a JSON state object as a query string.
pub fn query_encode(json: &str) -> Result<String> {
    let object = parse_object(json)?;
    Ok(encode_query(&object))
}

/// Decodes a query string into pretty-printed JSON.
///
/// With `defaults`, values are coerced to the kinds found there; otherwise
/// every value decodes as a string.
pub fn query_decode(query: &str, defaults: Option<&str>) -> Result<String> {
    let schema = match defaults {
        Some(json) => Schema::from_object(&parse_object(json).context("load defaults")?),
        None => Schema::empty(),
    };
    let object = decode_query(query, &schema);
    serde_json::to_string_pretty(&object).context("serialize state json")
}

/// Computes the delta of `state` against `base` as pretty-printed JSON.
pub fn delta_get(state: &str, base: &str) -> Result<String> {
    let state = parse_object(state).context("load state")?;
    let base = parse_object(base).context("load base")?;
    serde_json::to_string_pretty(&get_delta(&state, &base)).context("serialize delta json")
}

/// Applies `delta` on top of `base`, returning pretty-printed JSON.
pub fn delta_apply(delta: &str, base: &str) -> Result<String> {
    let delta = parse_object(delta).context("load delta")?;
    let base = parse_object(base).context("load base")?;
    serde_json::to_string_pretty(&apply_delta(&delta, &base)).context("serialize state json")
}
