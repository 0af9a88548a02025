//! Configuration for the state reflector.

use std::num::NonZeroUsize;
use std::time::Duration;

use crate::HistoryStack;

/// Tunables for [`Reflector`](crate::Reflector) and [`HistoryStack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectorConfig {
    /// Minimum time between two change-detection passes in
    /// [`Reflector::poll`](crate::Reflector::poll).
    ///
    /// All mutations made within one interval land in a single history entry.
    pub poll_interval: Duration,

    /// Maximum number of entries kept by a [`HistoryStack`].
    ///
    /// The reflector itself does not read this; it applies to stacks made
    /// with [`ReflectorConfig::history_stack`].
    pub history_capacity: NonZeroUsize,
}

impl Default for ReflectorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            history_capacity: capacity(50),
        }
    }
}

impl ReflectorConfig {
    /// Creates a configuration suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            poll_interval: Duration::from_millis(10),
            history_capacity: capacity(8),
        }
    }

    /// Creates an in-memory history sized by `history_capacity`, starting at
    /// `initial_query`.
    #[must_use]
    pub fn history_stack(&self, initial_query: impl Into<String>) -> HistoryStack {
        HistoryStack::new(self.history_capacity, initial_query)
    }

    /// Returns a copy with a different poll interval.
    #[must_use]
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

const fn capacity(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => NonZeroUsize::MIN,
    }
}
