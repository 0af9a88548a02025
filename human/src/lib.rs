//! Human-facing helpers for sk front ends.
//!
//! - [`find`] / [`round_number`]: pick a "round" number inside a range, for
//!   axis ticks.
//! - [`str_duration`] / [`diff_date`]: durations and relative times as short
//!   strings.
//! - [`format_html`], [`linkify_bugs`], [`to_cap_words`], [`sort_strings`]:
//!   text for commit messages and labels.

mod duration;
mod round;
mod text;

pub use duration::{diff_date, str_duration};
pub use round::{find, round_number, RoundNumberError, RoundResult};
pub use text::{format_html, linkify_bugs, sort_strings, to_cap_words};
