//! Replay-on-subscribe publish/subscribe mailboxes for sk.
//!
//! A [`Mailbox`] hands values to independent consumers that do not share a
//! render tree: each consumer subscribes to a string address and receives
//! the current value right away and every later value sent there.
//!
//! There is no global instance. The application wiring
//! layer creates one mailbox and passes it to the components that need it.

mod announce;
mod mailbox;

pub use announce::{ErrorAnnouncer, ErrorMessage, ERROR_ADDRESS};
pub use mailbox::{callback, Callback, Mailbox};
