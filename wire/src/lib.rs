//! Query-string framing and the ParamSet codec for sk.
//!
//! This crate handles the text wire format shared by every sk codec:
//! percent-encoding of individual components, splitting a query string into
//! `key=value` pairs, and the multi-valued ParamSet encoding. It does not
//! know about value types; typed decoding lives in the codec crate.
//!
//! # Design Principles
//!
//! - **Stable wire format** - A saved URL decodes to the same params later.
//! - **Total decoding** - Malformed input is tolerated and dropped, never rejected.

mod component;
mod pairs;
mod paramset;

pub use component::{decode_component, encode_component, URI_COMPONENT};
pub use pairs::{parse_pairs, push_pair, Pairs};
pub use paramset::{decode_param_set, encode_param_set, ParamSet};
