//! Scalar value model and type schemas for sk state codecs.
//!
//! This crate defines how page state is represented before it is written to
//! a URL:
//! - Scalar values (bool, number, string) and their kinds
//! - Insertion-ordered query objects
//! - Schemas that tell a decoder how to type raw query text
//! - Number parsing/formatting and loose equality compatible with existing URLs
//!
//! # Design Principles
//!
//! - **Explicit schemas** - Types come from a schema, not from inspecting values at decode time.
//! - **Stable text form** - A value renders to the same query text across sessions.

mod error;
mod number;
mod object;
mod schema;
mod value;

pub use error::{SchemaError, SchemaResult};
pub use number::{format_number, parse_number};
pub use object::QueryObject;
pub use schema::{FieldDef, Schema, SchemaBuilder};
pub use value::{Value, ValueKind};
