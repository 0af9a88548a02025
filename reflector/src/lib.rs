//! Bidirectional sync between page state and URL history for sk.
//!
//! A [`Reflector`] owns a flat state object and keeps it consistent with the
//! query string of a navigable [`History`]:
//!
//! - Local changes are detected by comparing against the last reflected
//!   snapshot and pushed as new history entries holding only the keys that
//!   differ from the defaults.
//! - Back/forward navigation and the host's readiness signal rebuild the
//!   state from the URL and notify a change callback.
//!
//! Everything runs on the host's UI thread; the reflector is `!Send` and
//! needs no locking. The host drives it by calling [`Reflector::poll`] from
//! its timer and forwarding navigation events.

mod config;
mod history;
mod reflector;

pub use config::ReflectorConfig;
pub use history::{History, HistoryStack};
pub use reflector::Reflector;
