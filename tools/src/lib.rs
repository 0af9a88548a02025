//! Command-line tooling for sk query strings and state sync.
//!
//! - Convert between JSON and query strings (param sets and typed state)
//! - Compute and apply state deltas
//! - Drive a reflector interactively against an in-memory history

pub mod convert;
pub mod session;

pub use convert::{
    delta_apply, delta_get, params_decode, params_encode, parse_object, parse_param_set,
    query_decode, query_encode,
};
pub use session::{HistoryView, Session, SessionCommand, STATE_ADDRESS};
