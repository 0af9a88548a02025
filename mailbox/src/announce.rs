//! Error announcements for whatever UI displays failures.

use std::rc::Rc;

use crate::{Callback, Mailbox};

/// The address error messages are sent to.
pub const ERROR_ADDRESS: &str = "error-sk";

/// A user-visible failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub message: String,
}

/// Publishes error messages on [`ERROR_ADDRESS`].
///
/// Code that fails calls [`announce`](Self::announce); a toast or status
/// widget subscribes with [`listen`](Self::listen).
#[derive(Debug, Default, Clone)]
pub struct ErrorAnnouncer {
    mailbox: Rc<Mailbox<ErrorMessage>>,
}

impl ErrorAnnouncer {
    /// Creates an announcer with its own mailbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an announcer over a mailbox owned by the caller.
    #[must_use]
    pub const fn with_mailbox(mailbox: Rc<Mailbox<ErrorMessage>>) -> Self {
        Self { mailbox }
    }

    /// Announces an error to every listener.
    pub fn announce(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(message = %message, "announcing error");
        self.mailbox.send(ERROR_ADDRESS, ErrorMessage { message });
    }

    /// Registers a listener. It immediately receives the last error, if any.
    pub fn listen(&self, callback: &Callback<ErrorMessage>) {
        self.mailbox.subscribe(ERROR_ADDRESS, callback);
    }

    /// Removes a listener.
    pub fn unlisten(&self, callback: &Callback<ErrorMessage>) {
        self.mailbox.unsubscribe(ERROR_ADDRESS, callback);
    }

    /// Returns the most recent error.
    #[must_use]
    pub fn last(&self) -> Option<ErrorMessage> {
        self.mailbox.value(ERROR_ADDRESS)
    }
}
